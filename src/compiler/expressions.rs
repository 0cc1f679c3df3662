use crate::bytecode::OpCode;
use crate::compiler::precedence::{get_rule, ParseFn, Precedence};
use crate::compiler::Compiler;
use crate::lexer::tokens::TokenKind;
use crate::values::Value;

impl<'a> Compiler<'a> {
  /// Compiles a single expression.
  pub(super) fn expression(&mut self) {
    self.parse_precedence(Precedence::Assignment);
  }

  /// The core of the Pratt parser: consumes one token and runs its prefix
  /// rule, then keeps consuming operators (and running their infix rules)
  /// for as long as their precedence is at least the one requested.
  pub(super) fn parse_precedence(&mut self, precedence: Precedence) {
    self.advance();

    match get_rule(self.previous.kind).prefix {
      ParseFn::None => {
        self.error("Expected an expression.");
        return;
      }
      prefix => self.run_parse_fn(prefix),
    }

    while precedence <= get_rule(self.current.kind).precedence {
      self.advance();
      let infix = get_rule(self.previous.kind).infix;
      self.run_parse_fn(infix);
    }
  }

  /// Executes the parsing function associated with a rule-table entry.
  fn run_parse_fn(&mut self, func: ParseFn) {
    match func {
      ParseFn::CompileBinaryExpr => self.compile_binary_expr(),
      ParseFn::CompileGrouping => self.compile_grouping(),
      ParseFn::CompileLiteral => self.compile_literal(),
      ParseFn::CompileNumeric => self.compile_numeric_literal(),
      ParseFn::CompileString => self.compile_string_literal(),
      ParseFn::CompileUnary => self.compile_unary_expr(),
      ParseFn::None => {}
    }
  }

  /// Compiles a parenthesized expression.
  fn compile_grouping(&mut self) {
    self.expression();
    self.consume(TokenKind::R_PAREN, "Expected ')' after expression.");
  }

  /// Compiles a numeric literal from the previous token's lexeme.
  fn compile_numeric_literal(&mut self) {
    let value: f64 = match self.previous.lexeme.parse() {
      Ok(num) => num,
      Err(_) => {
        self.error("Invalid numeric literal.");
        return;
      }
    };

    self.emit_constant(Value::Number(value));
  }

  /// Compiles a string literal. The lexeme already excludes the surrounding
  /// quotes, so the contents are interned as-is: equal literals across a
  /// program share a single heap object.
  fn compile_string_literal(&mut self) {
    let id = self.heap.intern(&self.previous.lexeme);
    self.emit_constant(Value::Str(id));
  }

  /// Compiles the `true`, `false`, and `nil` literals, which have dedicated
  /// instructions instead of constant-pool entries.
  fn compile_literal(&mut self) {
    match self.previous.kind {
      TokenKind::FALSE => self.emit_op_code(OpCode::LoadImmFalse),
      TokenKind::NIL => self.emit_op_code(OpCode::LoadImmNil),
      TokenKind::TRUE => self.emit_op_code(OpCode::LoadImmTrue),
      _ => unreachable!("Literals can only be 'true', 'false', or 'nil'."),
    }
  }

  /// Compiles a unary expression. The operand is compiled first (at unary
  /// precedence, so `--1` nests), then the operator executes on its result.
  fn compile_unary_expr(&mut self) {
    let operator = self.previous.kind;

    self.parse_precedence(Precedence::Unary);

    match operator {
      TokenKind::MINUS => self.emit_op_code(OpCode::Negate),
      TokenKind::LOGIC_NOT => self.emit_op_code(OpCode::LogicNot),
      _ => unreachable!("Unary operators can only be '-' or '!'."),
    }
  }

  /// Compiles a binary expression. The left operand has already been
  /// compiled; the right operand is parsed one precedence level higher so
  /// operators of equal precedence associate to the left.
  ///
  /// `!=`, `>=`, and `<=` have no instructions of their own and are
  /// compiled as the complement of `==`, `<`, and `>`.
  fn compile_binary_expr(&mut self) {
    let operator = self.previous.kind;

    let rule = get_rule(operator);
    self.parse_precedence(rule.precedence.one_higher());

    match operator {
      TokenKind::PLUS => self.emit_op_code(OpCode::Add),
      TokenKind::MINUS => self.emit_op_code(OpCode::Subtract),
      TokenKind::STAR => self.emit_op_code(OpCode::Multiply),
      TokenKind::SLASH => self.emit_op_code(OpCode::Divide),
      TokenKind::LOGIC_EQ => self.emit_op_code(OpCode::Equals),
      TokenKind::LOGIC_NOT_EQ => {
        self.emit_op_code(OpCode::Equals);
        self.emit_op_code(OpCode::LogicNot);
      }
      TokenKind::GREATER_THAN => self.emit_op_code(OpCode::GreaterThan),
      TokenKind::GREATER_THAN_EQ => {
        self.emit_op_code(OpCode::LessThan);
        self.emit_op_code(OpCode::LogicNot);
      }
      TokenKind::LESS_THAN => self.emit_op_code(OpCode::LessThan),
      TokenKind::LESS_THAN_EQ => {
        self.emit_op_code(OpCode::GreaterThan);
        self.emit_op_code(OpCode::LogicNot);
      }
      _ => unreachable!("Token '{:?}' is not a binary operator.", operator),
    }
  }
}
