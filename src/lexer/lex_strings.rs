use crate::lexer::tokens::Token;
use crate::lexer::tokens::TokenKind::STR_LIT;
use crate::lexer::Lexer;

impl Lexer {
  /// Makes a string literal. The surrounding quotes are excluded from the
  /// lexeme, and newlines inside the literal are permitted.
  pub(super) fn make_string_token(&mut self) -> Token {
    // Skip the opening quote in the lexeme.
    self.token_start += 1;

    loop {
      if self.is_at_end() {
        return self.make_error_token("Unterminated string.");
      }

      // Stop on the closing quote without consuming it, so the lexeme
      // covers the contents only.
      if self.get_current() == '"' {
        break;
      }

      // Advance through the string, taking new lines into account.
      if self.advance() == '\n' {
        self.line_num += 1;
        self.line_start = self.current;
      }
    }

    let str_token = self.make_token(STR_LIT);
    self.advance();

    str_token
  }
}
