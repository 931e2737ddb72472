//! End-to-end tests: run the built `calc` binary and check its stdout, stderr
//! and exit status.

use std::process::{Command, Output};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Path to the `calc` binary built by this Cargo workspace.
fn calc_binary() -> std::path::PathBuf {
    // CARGO_BIN_EXE_calc is set by cargo test infrastructure.
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_calc"))
}

fn run_calc(args: &[&str]) -> Output {
    Command::new(calc_binary())
        .args(args)
        .env("CALC_COLOR", "never")
        .env_remove("CALC_LOG")
        .output()
        .expect("failed to spawn calc binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── Expression mode ───────────────────────────────────────────────────────────

#[test]
fn prints_result_and_postfix() {
    let out = run_calc(&["2 + 3"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2 + 3 = 5\npostfix: 2 3 +\n");
}

#[test]
fn leading_minus_expression() {
    let out = run_calc(&["-(5)*-(3)"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "-(5)*-(3) = 15\npostfix: -1 5 * -1 3 * *\n");
}

#[test]
fn implicit_multiplication() {
    let out = run_calc(&["(3+4)(2+1)"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("(3+4)(2+1) = 21\n"));
}

#[test]
fn lex_error_exits_nonzero() {
    let out = run_calc(&["(43 a 44) + 45"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("calc: invalid character at position 4: 'a'"));
}

#[test]
fn syntax_error_exits_nonzero() {
    let out = run_calc(&["((55"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("calc: mismatched parenthesis"));
}

#[test]
fn eval_error_exits_nonzero() {
    let out = run_calc(&["1/0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("calc: division by zero"));
}

// ── Usage ─────────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_prints_usage() {
    let out = run_calc(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage: calc [<expression> | run_tests]"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let out = run_calc(&["2", "+", "3"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage: calc"));
}

// ── Self-test mode ────────────────────────────────────────────────────────────

#[test]
fn self_test_passes() {
    let out = run_calc(&["run_tests"]);
    let text = stdout(&out);
    assert!(out.status.success(), "self-test failed:\n{text}");
    assert!(text.trim_end().ends_with("All tests passed"));
    assert!(text.contains("-(5)(-3)(2) = 30"));
    assert!(text.contains("5.3.3 = error: unexpected token at position 3"));
    assert!(!text.contains('\u{1b}'), "colour should be off");
}
