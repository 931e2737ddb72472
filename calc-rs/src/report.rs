//! Console rendering for the `calc` binary.
//!
//! Everything here returns `String`s; `main` decides where they go. Colour is
//! applied with crossterm's [`Stylize`] only when the caller asks for it.

use std::fmt::Display;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::expr::Calculation;
use crate::selftest::{CaseResult, Outcome, Summary};

/// Whether stdout is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_tty()
}

/// `"{input} = {value}"` followed by `"postfix: {tokens}"`.
pub fn calculation(input: &str, calc: &Calculation) -> String {
    format!(
        "{input} = {}\npostfix: {}",
        calc.value,
        calc.postfix_string()
    )
}

fn ok_tag(color: bool) -> String {
    if color {
        "OK".green().to_string()
    } else {
        "OK".to_owned()
    }
}

fn err_tag(msg: impl Display, color: bool) -> String {
    let text = format!("ERROR: {msg}");
    if color {
        text.red().to_string()
    } else {
        text
    }
}

/// One line per self-test case.
pub fn case(result: &CaseResult, color: bool) -> String {
    let expr = result.expression;
    match &result.outcome {
        Outcome::Pass(value) => format!("{expr} = {value:<20} {}", ok_tag(color)),
        Outcome::Mismatch { value, expected } => format!(
            "{expr} = {value:<20} {}",
            err_tag(format_args!("expected {expected}"), color)
        ),
        Outcome::UnexpectedError(e) => format!("{expr} = {}", err_tag(e, color)),
        Outcome::Rejected(e) => {
            let msg = e.to_string();
            format!("{expr} = error: {msg:<40} {}", ok_tag(color))
        }
        Outcome::UnexpectedValue(value) => format!(
            "{expr} = {value:<20} {}",
            err_tag("expected an error", color)
        ),
    }
}

/// The whole self-test report, ending with the pass/fail verdict.
pub fn summary(summary: &Summary, color: bool) -> String {
    let mut lines: Vec<String> = summary.results.iter().map(|r| case(r, color)).collect();
    lines.push(String::new());
    lines.push(format!("{}/{} cases passed", summary.passed(), summary.total()));
    let verdict = if summary.all_passed() {
        "All tests passed"
    } else {
        "Some tests failed"
    };
    lines.push(match (color, summary.all_passed()) {
        (true, true) => verdict.green().bold().to_string(),
        (true, false) => verdict.red().bold().to_string(),
        (false, _) => verdict.to_owned(),
    });
    lines.join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
