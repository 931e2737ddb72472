//! Lexer: expression text → infix [`Token`] sequence.
//!
//! Besides splitting the input, the lexer settles everything that depends on
//! the previous token:
//!
//! - `+` / `-` at the start, after an operator, or after `(` are unary.
//!   Unary `+` is dropped; unary `-` becomes [`Token::UnaryMinus`].
//! - `(` directly after a number or `)` gets an implicit `*` in front of it.
//! - Adjacent numbers, adjacent operators, an operator opening the
//!   expression, and `)` after an operator or `(` are rejected here.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use super::token::{Operator, Token};
use crate::error::{LexError, LexErrorKind};

/// Longest numeric literal at the start of the haystack: digits with an
/// optional fraction, or a bare fraction, then an optional exponent.
fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("numeric literal pattern is valid")
    })
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer {
            src,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    fn push(&mut self, tok: Token) {
        trace!(token = %tok, "lexed");
        self.tokens.push(tok);
    }

    /// Whether a `+` / `-` here would be a sign rather than a binary operator.
    fn unary_context(&self) -> bool {
        matches!(
            self.last(),
            None | Some(Token::Operator(_)) | Some(Token::LeftParen)
        )
    }

    fn read_number(&mut self, start: usize, first: char) -> Result<(), LexError> {
        if matches!(self.last(), Some(Token::Number(_))) {
            return Err(LexError::new(LexErrorKind::UnexpectedNumber, start, first));
        }
        let invalid = || LexError::new(LexErrorKind::InvalidNumber, start, first);
        let m = number_re().find(&self.src[start..]).ok_or_else(invalid)?;
        let value: f64 = m.as_str().parse().map_err(|_| invalid())?;
        self.pos = start + m.end();
        self.push(Token::Number(value));
        Ok(())
    }

    fn read_operator(&mut self, start: usize, ch: char) -> Result<(), LexError> {
        if matches!(
            self.last(),
            None | Some(Token::Operator(_)) | Some(Token::UnaryMinus)
        ) {
            return Err(LexError::new(LexErrorKind::UnexpectedOperator, start, ch));
        }
        let op = Operator::try_from(ch)
            .map_err(|_| LexError::new(LexErrorKind::InvalidCharacter, start, ch))?;
        self.push(Token::Operator(op));
        Ok(())
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.peek() {
            let start = self.pos;
            self.pos += ch.len_utf8();

            if ch.is_ascii_whitespace() {
                continue;
            }

            if self.unary_context() {
                match ch {
                    '+' => continue,
                    '-' => {
                        self.push(Token::UnaryMinus);
                        continue;
                    }
                    _ => {}
                }
            }

            match ch {
                '0'..='9' | '.' => self.read_number(start, ch)?,
                '+' | '-' | '*' | '/' | '%' | '^' => self.read_operator(start, ch)?,
                '(' => {
                    // Implicit multiplication: 2(3) and (2)(3).
                    if matches!(self.last(), Some(Token::Number(_) | Token::RightParen)) {
                        self.push(Token::Operator(Operator::Mul));
                    }
                    self.push(Token::LeftParen);
                }
                ')' => {
                    if matches!(self.last(), Some(Token::Operator(_) | Token::LeftParen)) {
                        return Err(LexError::new(
                            LexErrorKind::UnexpectedCloseParen,
                            start,
                            ch,
                        ));
                    }
                    self.push(Token::RightParen);
                }
                c => return Err(LexError::new(LexErrorKind::InvalidCharacter, start, c)),
            }
        }
        Ok(self.tokens)
    }
}

/// Split `input` into infix tokens, failing on the first invalid construct.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(input).tokenize()?;
    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
