use crate::lexer::tokens::Token;
use crate::lexer::tokens::TokenKind::NUM_LIT;
use crate::lexer::Lexer;

impl Lexer {
  /// Makes a numeric literal: a run of digits, optionally followed by a
  /// decimal point and more digits. The point is only consumed when a digit
  /// follows it, so `1.` lexes as a number and a dot. No sign, no exponent.
  pub(super) fn make_numeric_token(&mut self) -> Token {
    while !self.is_at_end() && self.get_current().is_ascii_digit() {
      self.advance();
    }

    if !self.is_at_end() && self.get_current() == '.' && self.get_next().is_ascii_digit() {
      // Consume the decimal point.
      self.advance();

      while !self.is_at_end() && self.get_current().is_ascii_digit() {
        self.advance();
      }
    }

    self.make_token(NUM_LIT)
  }
}
