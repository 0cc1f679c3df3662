mod expressions;
mod precedence;
mod statements;

use crate::bytecode::OpCode;
use crate::chunk::Chunk;
use crate::lexer::tokens::{Token, TokenKind};
use crate::lexer::Lexer;
use crate::objects::Heap;
use crate::values::Value;
use crate::vm::InterpretResult;

/// Represents the compiler and its internal state.
///
/// The compiler is a single-pass Pratt parser: it pulls tokens from the
/// lexer on demand and emits bytecode straight into a chunk, with no
/// intermediate tree. One instance exists per compile and is discarded when
/// [`Compiler::compile`] returns.
pub struct Compiler<'a> {
  lexer: Lexer,
  previous: Token,
  current: Token,
  had_error: bool,
  is_in_panic: bool,
  chunk: Chunk,
  heap: &'a mut Heap,
}

impl<'a> Compiler<'a> {
  /// Compiles a given source string into a chunk of bytecode instructions.
  ///
  /// ## Arguments
  /// * `src` – The source text to be compiled.
  /// * `heap` – The heap that receives string constants; string literals are
  ///   interned at compile time.
  ///
  /// ## Returns
  /// `Result<Chunk, InterpretResult>` – The compiled chunk, ending in a
  /// `Return` instruction, if no compile errors were generated. An
  /// `InterpretResult::CompileError` otherwise.
  pub fn compile(src: &str, heap: &'a mut Heap) -> Result<Chunk, InterpretResult> {
    // Initialize the compiler.
    let mut s = Self {
      lexer: Lexer::lex(src),
      previous: Token {
        line_num: 0,
        column_start: 0,
        kind: TokenKind::__INIT_COMPILER__,
        lexeme: String::new(),
      },
      current: Token {
        line_num: 0,
        column_start: 0,
        kind: TokenKind::__INIT_COMPILER__,
        lexeme: String::new(),
      },
      had_error: false,
      is_in_panic: false,
      chunk: Chunk::default(),
      heap,
    };

    // Start compiling the chunk.
    s.advance();
    while !s.matches(TokenKind::EOF) {
      s.declaration();
    }

    s.emit_op_code(OpCode::Return);

    #[cfg(feature = "show_bytecode")]
    if !s.had_error {
      crate::disassembler::disassemble_chunk(&s.chunk, s.heap, "code");
    }

    if s.had_error {
      Err(InterpretResult::CompileError)
    } else {
      Ok(s.chunk)
    }
  }

  /// Checks that the current token matches the token kind provided.
  pub(super) fn check(&self, kind: TokenKind) -> bool {
    self.current.kind == kind
  }

  /// Checks that the current token matches the token kind provided.
  /// If the tokens match, the current token gets consumed and the function
  /// returns true. Otherwise the token is not consumed and the function
  /// returns false.
  pub(super) fn matches(&mut self, kind: TokenKind) -> bool {
    if self.check(kind) {
      self.advance();
      true
    } else {
      false
    }
  }

  /// Advances the compiler to the next token. Error tokens produced by the
  /// lexer are reported here (with the message they carry as their lexeme)
  /// and skipped, so the parsing functions only ever see real tokens.
  pub(super) fn advance(&mut self) {
    self.previous = self.current.clone();

    loop {
      self.current = self.lexer.next_token();

      if self.current.kind != TokenKind::ERROR {
        break;
      }

      let message = self.current.lexeme.clone();
      self.error_at_current(&message);
    }
  }

  /// Consumes the current token only if it is of a given kind.
  /// If the token does not match the kind, emits a compiler error.
  ///
  /// ## Arguments
  /// * `kind` – the expected kind of the token to consume.
  /// * `message` – the error message to be displayed if the current token
  ///   does not match the provided kind.
  pub(super) fn consume(&mut self, kind: TokenKind, message: &str) {
    if self.check(kind) {
      self.advance();
      return;
    }

    self.error_at_current(message);
  }

  /// Emits a byte instruction from an OpCode into the chunk, recorded at the
  /// previous token's line. Operators compiled after their operands land on
  /// the line where their expression ends, which keeps the chunk's line
  /// table non-decreasing.
  pub(super) fn emit_op_code(&mut self, instr: OpCode) {
    self.chunk.write_op_code(instr, self.previous.line_num);
  }

  /// Emits a raw byte into the chunk, recorded at the previous token's line.
  pub(super) fn emit_raw_byte(&mut self, byte: u8) {
    self.chunk.write(byte, self.previous.line_num);
  }

  /// Adds a value to the chunk's constants pool and emits the instructions
  /// that load it onto the stack at runtime.
  pub(super) fn emit_constant(&mut self, value: Value) {
    if let Some(index) = self.make_constant(value) {
      self.emit_op_code(OpCode::LoadConstant);
      self.emit_raw_byte(index);
    }
  }

  /// Adds a value to the chunk's constants pool. The single-byte operand of
  /// `LoadConstant` caps the pool at 256 entries; going past that is a
  /// compile error.
  fn make_constant(&mut self, value: Value) -> Option<u8> {
    let index = self.chunk.add_constant(value);

    if index > u8::MAX as usize {
      self.error("Too many constants in one chunk.");
      return None;
    }

    Some(index as u8)
  }

  /// Emits a compiler error located at the current token.
  pub(super) fn error_at_current(&mut self, message: &str) {
    let token = self.current.clone();
    self.error_at_token(&token, message);
  }

  /// Emits a compiler error located at the previous token.
  pub(super) fn error(&mut self, message: &str) {
    let token = self.previous.clone();
    self.error_at_token(&token, message);
  }

  /// Emits a compiler error from the given token.
  ///
  /// While the compiler is in panic mode, further errors are suppressed so a
  /// single mistake does not cascade. The covered grammar has no
  /// synchronization points, so panic mode persists to the end of the input.
  ///
  /// ## Arguments
  /// * `tok` – The token that caused the error.
  /// * `message` – The error message to display.
  pub(super) fn error_at_token(&mut self, tok: &Token, message: &str) {
    if self.is_in_panic {
      return;
    }
    self.is_in_panic = true;
    self.had_error = true;

    eprint!("SyntaxError [{}:{}]", tok.line_num, tok.column_start);

    match tok.kind {
      TokenKind::EOF => eprint!(" at the end of the program"),
      TokenKind::ERROR => {}
      _ => eprint!(" at '{}'", tok.lexeme),
    }

    eprintln!(": {}", message);
  }
}
