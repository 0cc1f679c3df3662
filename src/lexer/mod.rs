use crate::lexer::tokens::{Token, TokenKind};

// Submodules
mod lex_next_token;
mod lex_numbers;
mod lex_strings;
pub mod tokens;

/// Struct that represents the scanner.
///
/// Tokens are produced one at a time through [`Lexer::next_token`]; once the
/// end of the source is reached, every further call yields an EOF token.
pub struct Lexer {
  /// A flat list of characters from the source.
  source: Vec<char>,
  /// The index of the current character.
  current: usize,
  /// The current line number.
  line_num: usize,
  /// The position in the flat source vector of the first
  /// character for the current line.
  line_start: usize,
  /// The position of the first character for the current
  /// token in the flat source vector.
  token_start: usize,
}

impl Lexer {
  /// An initialized instance of the lexer.
  ///
  /// # Parameters
  /// - `src`: the source text to scan.
  pub fn lex(src: &str) -> Lexer {
    Self {
      source: src.chars().collect(),
      current: 0,
      line_num: 1,
      line_start: 0,
      token_start: 0,
    }
  }

  /// Gets the current character without consuming it.
  pub(super) fn get_current(&self) -> char {
    self.source[self.current]
  }

  /// Returns the next character without consuming it.
  pub(super) fn get_next(&self) -> char {
    if self.current + 1 >= self.source.len() {
      return '\0';
    }

    self.source[self.current + 1]
  }

  /// Checks if the scanner is at the end of the source.
  pub(super) fn is_at_end(&self) -> bool {
    self.current >= self.source.len()
  }

  /// Matches the current character against a provided character, consuming
  /// it on a match.
  pub(super) fn matches(&mut self, expected: char) -> bool {
    if self.is_at_end() || self.get_current() != expected {
      return false;
    }

    self.current += 1;
    true
  }

  /// Advances to the next char and returns the consumed char.
  pub(super) fn advance(&mut self) -> char {
    let current = self.get_current();
    self.current += 1;
    current
  }

  /// Skips whitespace, newlines, and single-line comments from the source,
  /// keeping the line counter up to date.
  pub(super) fn skip_whitespace(&mut self) {
    loop {
      if self.is_at_end() {
        break;
      }

      let c = self.get_current();

      if c == ' ' || c == '\r' || c == '\t' {
        self.advance();
      } else if c == '\n' {
        self.line_num += 1;
        self.advance();
        self.line_start = self.current;
      } else if c == '/' && self.get_next() == '/' {
        // Comments run to the end of the line; the newline itself is
        // handled by the next loop iteration.
        while !self.is_at_end() && self.get_current() != '\n' {
          self.advance();
        }
      } else {
        break;
      }
    }
  }

  /// Generates an identifier or keyword token with the current state of the
  /// scanner.
  pub(super) fn make_identifier_token(&mut self) -> Token {
    while !self.is_at_end() {
      let c = self.get_current();

      if c.is_ascii_alphanumeric() || c == '_' {
        self.advance();
      } else {
        break;
      }
    }

    let id: String = self.source[self.token_start..self.current].iter().collect();
    let kind = tokens::make_identifier_kind(id.as_str());

    self.make_token(kind)
  }

  /// Generates a token with the current state of the scanner.
  pub(super) fn make_token(&self, kind: TokenKind) -> Token {
    let lexeme = match kind {
      TokenKind::EOF => String::from("\0"),
      _ => self.source[self.token_start..self.current].iter().collect(),
    };

    Token {
      line_num: self.line_num,
      column_start: self.token_start.saturating_sub(self.line_start),
      kind,
      lexeme,
    }
  }

  /// Generates an error token with the provided message as its lexeme.
  ///
  /// # Parameters
  /// - `message`: A message for the error token. This will be used as the
  ///   token's lexeme.
  pub(super) fn make_error_token(&self, message: &str) -> Token {
    Token {
      line_num: self.line_num,
      column_start: self.token_start.saturating_sub(self.line_start),
      kind: TokenKind::ERROR,
      lexeme: String::from(message),
    }
  }
}
