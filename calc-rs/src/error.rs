//! Error types for each pipeline stage.
//!
//! Every stage reports its own error type; [`CalcError`] is the umbrella the
//! pipeline returns so callers can `match` on the failing stage.

use thiserror::Error;

// ── Lexer ─────────────────────────────────────────────────────────────────────

/// What the lexer rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A numeric literal directly after another number.
    UnexpectedNumber,
    /// A binary operator at the start, or after another operator.
    UnexpectedOperator,
    /// `)` closing an empty group or following an operator.
    UnexpectedCloseParen,
    /// A character outside the expression alphabet.
    InvalidCharacter,
    /// A `.` (or similar) that does not form a numeric literal.
    InvalidNumber,
}

/// A lexical error at a 0-based byte offset in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
    pub found: char,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: usize, found: char) -> Self {
        LexError {
            kind,
            position,
            found,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (pos, found) = (self.position, self.found);
        match self.kind {
            LexErrorKind::UnexpectedNumber => write!(
                f,
                "unexpected token at position {pos}, expected OPERATOR or PARENTHESES but found '{found}'"
            ),
            LexErrorKind::UnexpectedOperator | LexErrorKind::UnexpectedCloseParen => write!(
                f,
                "unexpected token at position {pos}, expected NUMBER but found '{found}'"
            ),
            LexErrorKind::InvalidCharacter => {
                write!(f, "invalid character at position {pos}: '{found}'")
            }
            LexErrorKind::InvalidNumber => write!(f, "invalid number at position {pos}"),
        }
    }
}

impl std::error::Error for LexError {}

// ── Converter ─────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid expression")]
    InvalidExpression,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid operator '{0}'")]
    InvalidOperator(char),
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Any failure from [`calculate`](crate::expr::calculate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
