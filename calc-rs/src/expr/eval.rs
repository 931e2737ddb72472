//! Postfix evaluation with a value stack.

use tracing::{debug, trace};

use super::token::Token;
use crate::error::EvalError;

/// Evaluate a postfix token sequence to a single value.
///
/// Tokens other than numbers and operators are skipped. Exactly one value
/// must remain on the stack at the end.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        match *tok {
            Token::Number(v) => stack.push(v),
            Token::Operator(op) => {
                let (Some(r), Some(l)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::InvalidExpression);
                };
                let out = op.apply(l, r)?;
                trace!(%op, l, r, out, "applied");
                stack.push(out);
            }
            Token::UnaryMinus | Token::LeftParen | Token::RightParen => {}
        }
    }

    match stack.as_slice() {
        [value] => {
            debug!(value, "evaluated postfix");
            Ok(*value)
        }
        _ => Err(EvalError::InvalidExpression),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
