//! `calc`: arithmetic expression calculator.
//!
//! The core is the [`expr`] pipeline (lexer → shunting-yard converter →
//! postfix evaluator). The remaining modules support the `calc` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod expr;
pub mod report;
pub mod selftest;

pub use error::{CalcError, EvalError, LexError, LexErrorKind, SyntaxError};
pub use expr::{calculate, eval_str, Calculation, Operator, Token};
