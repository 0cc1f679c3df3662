use crate::lexer::tokens::Token;
use crate::lexer::tokens::TokenKind::*;
use crate::lexer::Lexer;

impl Lexer {
  /// Scans the next token in the source.
  pub fn next_token(&mut self) -> Token {
    self.skip_whitespace();

    // Reset the start of the token.
    self.token_start = self.current;

    // If we are at the end, return the EOF token.
    if self.is_at_end() {
      return self.make_token(EOF);
    }

    let c = self.advance();

    // Generates an identifier/keyword token if the current character is a
    // letter or an underscore.
    if c.is_ascii_alphabetic() || c == '_' {
      return self.make_identifier_token();
    }

    // Generates a numeric literal if the current character is a digit.
    if c.is_ascii_digit() {
      return self.make_numeric_token();
    }

    // Generate symbol-like tokens.
    match c {
      '"' => self.make_string_token(),
      '(' => self.make_token(L_PAREN),
      ')' => self.make_token(R_PAREN),
      '{' => self.make_token(L_CURLY),
      '}' => self.make_token(R_CURLY),
      ';' => self.make_token(SEMICOLON),
      ',' => self.make_token(COMMA),
      '.' => self.make_token(DOT),
      '-' => self.make_token(MINUS),
      '+' => self.make_token(PLUS),
      '/' => self.make_token(SLASH),
      '*' => self.make_token(STAR),
      '!' => {
        let kind = if self.matches('=') { LOGIC_NOT_EQ } else { LOGIC_NOT };
        self.make_token(kind)
      }
      '=' => {
        let kind = if self.matches('=') { LOGIC_EQ } else { EQUALS };
        self.make_token(kind)
      }
      '<' => {
        let kind = if self.matches('=') { LESS_THAN_EQ } else { LESS_THAN };
        self.make_token(kind)
      }
      '>' => {
        let kind = if self.matches('=') {
          GREATER_THAN_EQ
        } else {
          GREATER_THAN
        };
        self.make_token(kind)
      }

      // Everything else is an error token.
      _ => self.make_error_token("Unexpected character."),
    }
  }
}
