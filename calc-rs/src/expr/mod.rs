//! Arithmetic expression pipeline.
//!
//! Text is processed in three stages, each consuming the full output of the
//! previous one:
//!
//! 1. [`lexer::tokenize`]: text → infix [`Token`]s
//! 2. [`postfix::to_postfix`]: infix → postfix (shunting yard)
//! 3. [`eval::evaluate`]: postfix → `f64`
//!
//! Operator precedence (lowest → highest), all left-associative:
//!   `+ -`  →  `* / %`  →  `^`
//!
//! # Quick start
//!
//! ```rust
//! use calc::expr::calculate;
//!
//! let calc = calculate("2(3 + 4)").unwrap();
//! assert_eq!(calc.value, 14.0);
//! assert_eq!(calc.postfix_string(), "2 3 4 + *");
//! ```

pub mod eval;
pub mod lexer;
pub mod postfix;
pub mod token;

use tracing::debug;

use crate::error::CalcError;

pub use eval::evaluate;
pub use lexer::tokenize;
pub use postfix::to_postfix;
pub use token::{render_tokens, Operator, Token};

/// The result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub value: f64,
    /// The postfix sequence the value was computed from.
    pub postfix: Vec<Token>,
}

impl Calculation {
    pub fn postfix_string(&self) -> String {
        render_tokens(&self.postfix)
    }
}

/// Run the full pipeline on `input`.
pub fn calculate(input: &str) -> Result<Calculation, CalcError> {
    debug!(input, "calculating");
    let infix = tokenize(input)?;
    let postfix = to_postfix(&infix)?;
    let value = evaluate(&postfix)?;
    Ok(Calculation { value, postfix })
}

/// Like [`calculate`], returning only the value.
pub fn eval_str(input: &str) -> Result<f64, CalcError> {
    calculate(input).map(|c| c.value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, LexError, LexErrorKind, SyntaxError};

    fn eval(src: &str) -> f64 {
        eval_str(src).expect("eval failed")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("2 + 3"), 5.0);
        assert_eq!(eval("4 - 5"), -1.0);
        assert_eq!(eval("6 * 7"), 42.0);
        assert_eq!(eval("10 % 4"), 2.0);
        assert_eq!(eval("2 ^ 10"), 1024.0);
        assert_close(eval("8 / 9"), 8.0 / 9.0);
    }

    #[test]
    fn grouping() {
        assert_eq!(eval("(10 + 11) * 12"), 252.0);
        assert_close(eval("(19 / 20) - 21"), -20.05);
        assert_close(eval("(-42 / -43) + 44"), 44.9767441860465);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(eval("2(3+4)"), 14.0);
        assert_eq!(eval("(3+4)(2+1)"), 21.0);
    }

    #[test]
    fn unary_composition() {
        assert_eq!(eval("-(5)(-3)(2)"), 30.0);
        assert_eq!(eval("-(5)*-(3)"), 15.0);
        assert_eq!(eval("-2 ^ 2"), -4.0);
        assert_eq!(eval("+-3"), -3.0);
    }

    #[test]
    fn left_associative_power() {
        assert_eq!(eval("2 ^ 3 ^ 2"), 64.0);
    }

    #[test]
    fn errors_by_stage() {
        assert_eq!(
            eval_str("2 +* 3"),
            Err(CalcError::Lex(LexError::new(
                LexErrorKind::UnexpectedOperator,
                3,
                '*'
            )))
        );
        assert_eq!(
            eval_str("((5"),
            Err(CalcError::Syntax(SyntaxError::MismatchedParenthesis))
        );
        assert_eq!(
            eval_str("5))"),
            Err(CalcError::Syntax(SyntaxError::MismatchedParenthesis))
        );
        assert_eq!(
            eval_str("6 * 7 +"),
            Err(CalcError::Eval(EvalError::InvalidExpression))
        );
        for src in ["0 / 0", "0 ^ 0", "0 ^ -1", "1/0"] {
            assert_eq!(
                eval_str(src),
                Err(CalcError::Eval(EvalError::DivisionByZero)),
                "{src}"
            );
        }
    }

    #[test]
    fn calculation_keeps_postfix() {
        let c = calculate("2 + 3").unwrap();
        assert_eq!(c.value, 5.0);
        assert_eq!(c.postfix_string(), "2 3 +");
    }
}
