//! Shunting-yard conversion from infix to postfix order.

use tracing::debug;

use super::token::{render_tokens, Operator, Token};
use crate::error::SyntaxError;

/// Entries on the converter's operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Op(Operator),
    Paren,
}

/// Convert an infix token sequence into postfix order.
///
/// Output contains only [`Token::Number`] and [`Token::Operator`].
/// [`Token::UnaryMinus`] is rewritten as `-1` followed by a deferred `*`,
/// so `-(5)` becomes `-1 5 *`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for tok in tokens {
        match *tok {
            Token::Number(_) => output.push(*tok),
            Token::Operator(op) => {
                while let Some(&Pending::Op(top)) = stack.last() {
                    if top.rank() < op.rank() {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Op(op));
            }
            Token::UnaryMinus => {
                output.push(Token::Number(-1.0));
                stack.push(Pending::Op(Operator::Mul));
            }
            Token::LeftParen => stack.push(Pending::Paren),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Op(op)) => output.push(Token::Operator(op)),
                    Some(Pending::Paren) => break,
                    None => return Err(SyntaxError::MismatchedParenthesis),
                }
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Token::Operator(op)),
            Pending::Paren => return Err(SyntaxError::MismatchedParenthesis),
        }
    }

    debug!(postfix = %render_tokens(&output), "converted to postfix");
    Ok(output)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
