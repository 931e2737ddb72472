//! Token vocabulary shared by the lexer, converter and evaluator.

use std::fmt;

use crate::error::EvalError;

/// Tolerance used when deciding whether an operand is zero.
pub const EPSILON: f64 = 1e-5;

/// `|a - b| < EPSILON`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// ── Operator ──────────────────────────────────────────────────────────────────

/// One of the six binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Pow => '^',
        }
    }

    /// Binding strength: `^` 3, `* / %` 2, `+ -` 1.
    ///
    /// The converter pops while the stacked operator's rank is `>=` the
    /// incoming one, so every operator (including `^`) is left-associative.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Pow => 3,
            Operator::Mul | Operator::Div | Operator::Rem => 2,
            Operator::Add | Operator::Sub => 1,
        }
    }

    /// Apply the operator to `l` and `r`.
    pub fn apply(self, l: f64, r: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(l + r),
            Operator::Sub => Ok(l - r),
            Operator::Mul => Ok(l * r),
            Operator::Div => {
                if approx_eq(r, 0.0) {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(l / r)
            }
            Operator::Rem => {
                // `as` truncates toward zero and saturates out-of-range values.
                let (li, ri) = (l as i64, r as i64);
                if ri == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(li.wrapping_rem(ri) as f64)
            }
            Operator::Pow => {
                // 0^0 and 0^negative are undefined.
                if approx_eq(l, 0.0) && r <= EPSILON {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(l.powf(r))
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            '%' => Ok(Operator::Rem),
            '^' => Ok(Operator::Pow),
            other => Err(EvalError::InvalidOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ── Token ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    /// Prefix negation; the converter rewrites it as `-1 *`.
    UnaryMinus,
    LeftParen,
    RightParen,
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::UnaryMinus => f.write_str("neg"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Render a token sequence space-separated, e.g. `2 3 +`.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
