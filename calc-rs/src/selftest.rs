//! Built-in self-test tables (`calc run_tests`).
//!
//! Runs every entry of [`VALID_CASES`] and [`INVALID_CASES`] through the full
//! pipeline and records one [`CaseResult`] per entry. Rendering lives in
//! [`crate::report`].

use tracing::{info, warn};

use crate::error::CalcError;
use crate::expr::eval_str;

/// Relative tolerance for comparing a result with its expected value.
pub const TOLERANCE: f64 = 1e-6;

/// Expressions and their expected values.
pub const VALID_CASES: &[(&str, f64)] = &[
    ("2 + 3", 5.0),
    ("4 - 5", -1.0),
    ("6 * 7", 42.0),
    ("8 / 9", 0.888_888_888_888_888_8),
    ("(10 + 11) * 12", 252.0),
    ("(13 - 14) / 15", -0.066_666_666_666_666_67),
    ("(16 * 17) + 18", 290.0),
    ("(19 / 20) - 21", -20.05),
    ("(22 + 23) * (24 - 25)", -45.0),
    ("(26 / 27) + (28 * 29)", 812.962_962_963),
    ("(30 + 31) / (32 - 33)", -61.0),
    ("(34 * 35) / (36 + 37)", 16.301_369_863_013_697),
    ("2.5 + 3.5", 6.0),
    ("4.5 - 5.5", -1.0),
    ("6.5 * 7.5", 48.75),
    ("8.5 / 9.5", 0.894_736_842_105_263_2),
    ("(10.5 + 11) * -12", -258.0),
    ("(13 - -14) / 15", 1.8),
    ("(16 * -17) + 18", -254.0),
    ("(-19 / 20) - -21", 20.05),
    ("(22 + -23) * (24 - -25)", -49.0),
    ("(22 + -23) (24 - -25)", -49.0),
    ("-(5)(-3)(2)", 30.0),
    ("(-26 / 27) + (28 * -29)", -812.962_962_963),
    ("(-30 + 31) / (-32 - 33)", -0.015_384_615_384_615_385),
    ("(-34 * 35) / (-36 + 37)", -1190.0),
    ("(38 + -39) * (40 - -41)", -81.0),
    ("(-42 / -43) + 44", 44.976_744_186_046_5),
    ("-(5)*-(3)", 15.0),
];

/// Expressions that must be rejected by some stage of the pipeline.
pub const INVALID_CASES: &[&str] = &[
    "*1 + 2 + 3",
    "2 +* 3",
    "4 - 5 /",
    "6 * 7 +",
    "8 / 9 -",
    "(38 + 39) * (40 - )",
    "(41 / ) - 42",
    "(43 a 44) + 45",
    "(46 +* 47) * (48 - 49)",
    "5.3.3",
    "((55",
    "56))",
    "0 / 0",
    "0 ^ 0",
    "0 ^ -1",
    "1/0",
];

/// `actual` is within [`TOLERANCE`] of `expected`, relative to its magnitude.
pub fn within_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Value matched.
    Pass(f64),
    /// Value computed but wrong.
    Mismatch { value: f64, expected: f64 },
    /// A valid case failed.
    UnexpectedError(CalcError),
    /// An invalid case failed, as it should.
    Rejected(CalcError),
    /// An invalid case produced a value.
    UnexpectedValue(f64),
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Pass(_) | Outcome::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub expression: &'static str,
    pub outcome: Outcome,
}

/// Results of a full self-test run, valid cases first.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub results: Vec<CaseResult>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

fn check_valid(expression: &'static str, expected: f64) -> CaseResult {
    let outcome = match eval_str(expression) {
        Ok(value) if within_tolerance(value, expected) => Outcome::Pass(value),
        Ok(value) => Outcome::Mismatch { value, expected },
        Err(e) => Outcome::UnexpectedError(e),
    };
    CaseResult {
        expression,
        outcome,
    }
}

fn check_invalid(expression: &'static str) -> CaseResult {
    let outcome = match eval_str(expression) {
        Ok(value) => Outcome::UnexpectedValue(value),
        Err(e) => Outcome::Rejected(e),
    };
    CaseResult {
        expression,
        outcome,
    }
}

/// Run both tables.
pub fn run() -> Summary {
    let results: Vec<CaseResult> = VALID_CASES
        .iter()
        .map(|&(expr, expected)| check_valid(expr, expected))
        .chain(INVALID_CASES.iter().map(|&expr| check_invalid(expr)))
        .collect();

    for r in results.iter().filter(|r| !r.outcome.passed()) {
        warn!(expression = r.expression, outcome = ?r.outcome, "self-test case failed");
    }
    let summary = Summary { results };
    info!(
        passed = summary.passed(),
        total = summary.total(),
        "self-test finished"
    );
    summary
}

// ── Tests ─────────────────────────────────────────────────────────────────────
