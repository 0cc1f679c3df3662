/// A token that represents a single unit of Kite code.
#[derive(Clone, Debug)]
pub struct Token {
  /// The token's line number.
  pub line_num: usize,
  /// The token's column start.
  pub column_start: usize,
  /// The token's type.
  pub kind: TokenKind,
  /// The token's lexeme. Error tokens carry their message here instead.
  pub lexeme: String,
}

/// The types of tokens in a Kite program.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
  CLASS_KW,
  COMMA,
  DOT,
  ELSE_KW,
  EOF,
  EQUALS,
  ERROR,
  FALSE,
  FOR_KW,
  FUN_KW,
  GREATER_THAN,
  GREATER_THAN_EQ,
  IDENTIFIER,
  IF_KW,
  LESS_THAN,
  LESS_THAN_EQ,
  LOGIC_AND,
  LOGIC_EQ,
  LOGIC_NOT,
  LOGIC_NOT_EQ,
  LOGIC_OR,
  L_CURLY,
  L_PAREN,
  MINUS,
  NIL,
  NUM_LIT,
  PLUS,
  PRINT_KW,
  RETURN_KW,
  R_CURLY,
  R_PAREN,
  SEMICOLON,
  SLASH,
  STAR,
  STR_LIT,
  SUPER_KW,
  THIS_KW,
  TRUE,
  VAR_KW,
  WHILE_KW,

  // This one is only used to initialize the compiler.
  __INIT_COMPILER__,
}

/// Maps a keyword string to a token kind.
///
/// # Parameters
/// - `id`: The identifier's string name.
///
/// # Returns
/// `TokenKind`: The kind of token matched for the given identifier name.
pub fn make_identifier_kind(id: &str) -> TokenKind {
  match id {
    "and" => TokenKind::LOGIC_AND,
    "class" => TokenKind::CLASS_KW,
    "else" => TokenKind::ELSE_KW,
    "false" => TokenKind::FALSE,
    "for" => TokenKind::FOR_KW,
    "fun" => TokenKind::FUN_KW,
    "if" => TokenKind::IF_KW,
    "nil" => TokenKind::NIL,
    "or" => TokenKind::LOGIC_OR,
    "print" => TokenKind::PRINT_KW,
    "return" => TokenKind::RETURN_KW,
    "super" => TokenKind::SUPER_KW,
    "this" => TokenKind::THIS_KW,
    "true" => TokenKind::TRUE,
    "var" => TokenKind::VAR_KW,
    "while" => TokenKind::WHILE_KW,
    _ => TokenKind::IDENTIFIER,
  }
}
