use crate::bytecode::OpCode;
use crate::compiler::Compiler;
use crate::lexer::tokens::TokenKind;

impl<'a> Compiler<'a> {
  /// Compiles a declaration. The covered grammar has no declaring forms yet,
  /// so every declaration is a statement.
  pub(super) fn declaration(&mut self) {
    self.statement();
  }

  /// Compiles a statement.
  fn statement(&mut self) {
    if self.matches(TokenKind::PRINT_KW) {
      self.compile_print_stmt();
    } else {
      self.compile_expression_stmt();
    }
  }

  /// Compiles a print statement.
  fn compile_print_stmt(&mut self) {
    self.expression();
    self.consume(TokenKind::SEMICOLON, "Expected ';' after expression.");
    self.emit_op_code(OpCode::Print);
  }

  /// Compiles an expression statement. The expression's value is discarded
  /// once it has been computed.
  fn compile_expression_stmt(&mut self) {
    self.expression();
    self.consume(TokenKind::SEMICOLON, "Expected ';' after expression.");
    self.emit_op_code(OpCode::PopStackTop);
  }
}
