use crate::lexer::tokens::TokenKind::{self, *};
use crate::lexer::Lexer;

/// Scans the whole source, returning every token kind up to and including
/// the first EOF.
fn lex_kinds(src: &str) -> Vec<TokenKind> {
  let mut lexer = Lexer::lex(src);
  let mut kinds = vec![];

  loop {
    let token = lexer.next_token();
    kinds.push(token.kind);

    if token.kind == EOF {
      return kinds;
    }
  }
}

#[test]
fn single_character_tokens() {
  assert_eq!(
    lex_kinds("( ) { } , . - + ; / *"),
    vec![L_PAREN, R_PAREN, L_CURLY, R_CURLY, COMMA, DOT, MINUS, PLUS, SEMICOLON, SLASH, STAR, EOF]
  );
}

#[test]
fn one_and_two_character_operators() {
  assert_eq!(
    lex_kinds("! != = == > >= < <="),
    vec![
      LOGIC_NOT,
      LOGIC_NOT_EQ,
      EQUALS,
      LOGIC_EQ,
      GREATER_THAN,
      GREATER_THAN_EQ,
      LESS_THAN,
      LESS_THAN_EQ,
      EOF
    ]
  );
}

#[test]
fn keywords_and_identifiers() {
  assert_eq!(
    lex_kinds("and class else false for fun if nil or print return super this true var while"),
    vec![
      LOGIC_AND, CLASS_KW, ELSE_KW, FALSE, FOR_KW, FUN_KW, IF_KW, NIL, LOGIC_OR, PRINT_KW,
      RETURN_KW, SUPER_KW, THIS_KW, TRUE, VAR_KW, WHILE_KW, EOF
    ]
  );

  // Near-keywords are plain identifiers.
  assert_eq!(lex_kinds("printer _fun nil2"), vec![IDENTIFIER, IDENTIFIER, IDENTIFIER, EOF]);
}

#[test]
fn numeric_literals() {
  let mut lexer = Lexer::lex("123 4.75");

  let first = lexer.next_token();
  assert_eq!(first.kind, NUM_LIT);
  assert_eq!(first.lexeme, "123");

  let second = lexer.next_token();
  assert_eq!(second.kind, NUM_LIT);
  assert_eq!(second.lexeme, "4.75");
}

#[test]
fn a_trailing_dot_is_not_part_of_a_number() {
  assert_eq!(lex_kinds("1."), vec![NUM_LIT, DOT, EOF]);
}

#[test]
fn string_lexemes_exclude_the_quotes() {
  let mut lexer = Lexer::lex("\"hello\"");

  let token = lexer.next_token();
  assert_eq!(token.kind, STR_LIT);
  assert_eq!(token.lexeme, "hello");
  assert_eq!(lexer.next_token().kind, EOF);
}

#[test]
fn strings_may_span_lines() {
  let mut lexer = Lexer::lex("\"one\ntwo\" 3");

  assert_eq!(lexer.next_token().kind, STR_LIT);

  // The newline inside the literal advanced the line counter.
  let number = lexer.next_token();
  assert_eq!(number.kind, NUM_LIT);
  assert_eq!(number.line_num, 2);
}

#[test]
fn unterminated_strings_yield_an_error_token() {
  let mut lexer = Lexer::lex("\"oops");

  let token = lexer.next_token();
  assert_eq!(token.kind, ERROR);
  assert_eq!(token.lexeme, "Unterminated string.");
}

#[test]
fn unexpected_characters_yield_an_error_token() {
  let mut lexer = Lexer::lex("@");

  let token = lexer.next_token();
  assert_eq!(token.kind, ERROR);
  assert_eq!(token.lexeme, "Unexpected character.");
}

#[test]
fn comments_run_to_the_end_of_the_line() {
  assert_eq!(lex_kinds("// nothing here\n1 // more\n"), vec![NUM_LIT, EOF]);
}

#[test]
fn newlines_increment_the_line_counter() {
  let mut lexer = Lexer::lex("1\n2\n\n3");

  assert_eq!(lexer.next_token().line_num, 1);
  assert_eq!(lexer.next_token().line_num, 2);
  assert_eq!(lexer.next_token().line_num, 4);
}

#[test]
fn eof_is_returned_repeatedly() {
  let mut lexer = Lexer::lex("");

  assert_eq!(lexer.next_token().kind, EOF);
  assert_eq!(lexer.next_token().kind, EOF);
  assert_eq!(lexer.next_token().kind, EOF);
}
