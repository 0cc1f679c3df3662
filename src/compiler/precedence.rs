use crate::lexer::tokens::TokenKind;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// Represents the precedence of different expressions in ascending order.
/// For example, `Equality` has lower precedence than `Unary` because
/// `Equality` appears earlier in the enum, and `Unary` appears after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
#[repr(u8)]
#[derive(FromPrimitive)]
pub enum Precedence {
  None,
  Assignment, // =
  Or,         // or
  And,        // and
  Equality,   // == !=
  Comparison, // < > <= >=
  Term,       // + -
  Factor,     // * /
  Unary,      // ! -
  Call,       // . ()
  Primary,
}

impl Precedence {
  /// Gets the next-higher precedence level. Used by binary expressions so
  /// the right operand binds one level tighter, making the operators
  /// left-associative.
  pub fn one_higher(self) -> Precedence {
    Precedence::from_u8(self as u8 + 1).unwrap_or(Precedence::Primary)
  }
}

/// The set of compiling functions that can be associated
/// with a given token.
#[derive(Clone, Copy)]
pub enum ParseFn {
  CompileBinaryExpr,
  CompileGrouping,
  CompileLiteral,
  CompileNumeric,
  CompileString,
  CompileUnary,
  None, // Do not call a parsing function.
}

/// Wraps the parsing properties of a token so that they
/// can be easily accessed throughout the compiler.
pub struct ParseRule {
  pub prefix: ParseFn,
  pub infix: ParseFn,
  pub precedence: Precedence,
}

pub fn get_rule(kind: TokenKind) -> ParseRule {
  match kind {
    TokenKind::FALSE => ParseRule {
      prefix: ParseFn::CompileLiteral,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    TokenKind::GREATER_THAN => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Comparison,
    },

    TokenKind::GREATER_THAN_EQ => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Comparison,
    },

    TokenKind::LESS_THAN => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Comparison,
    },

    TokenKind::LESS_THAN_EQ => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Comparison,
    },

    TokenKind::LOGIC_EQ => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Equality,
    },

    TokenKind::LOGIC_NOT => ParseRule {
      prefix: ParseFn::CompileUnary,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    TokenKind::LOGIC_NOT_EQ => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Equality,
    },

    TokenKind::L_PAREN => ParseRule {
      prefix: ParseFn::CompileGrouping,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    TokenKind::MINUS => ParseRule {
      prefix: ParseFn::CompileUnary,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Term,
    },

    TokenKind::NIL => ParseRule {
      prefix: ParseFn::CompileLiteral,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    TokenKind::NUM_LIT => ParseRule {
      prefix: ParseFn::CompileNumeric,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    TokenKind::PLUS => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Term,
    },

    TokenKind::SLASH => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Factor,
    },

    TokenKind::STAR => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::CompileBinaryExpr,
      precedence: Precedence::Factor,
    },

    TokenKind::STR_LIT => ParseRule {
      prefix: ParseFn::CompileString,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    TokenKind::TRUE => ParseRule {
      prefix: ParseFn::CompileLiteral,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },

    // The rest of the tokens do not have a parse rule.
    _ => ParseRule {
      prefix: ParseFn::None,
      infix: ParseFn::None,
      precedence: Precedence::None,
    },
  }
}
