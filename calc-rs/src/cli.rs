//! Command-line argument parsing.
//!
//! Usage:
//!   calc <expression>
//!   calc run_tests
//!
//! There are no flags: an argument starting with `-` (e.g. `-5+2`) is an
//! expression like any other.

/// Literal argument that selects the self-test mode.
pub const SELF_TEST_ARG: &str = "run_tests";

pub const USAGE: &str = "Usage: calc [<expression> | run_tests]";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate one expression.
    Evaluate(String),
    /// Run the embedded self-test tables.
    SelfTest,
}

/// Parse `std::env::args()` into a [`Command`], or return an error message.
pub fn parse_args() -> Result<Command, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<Command, String> {
    match argv {
        [arg] if arg == SELF_TEST_ARG => Ok(Command::SelfTest),
        [expr] => Ok(Command::Evaluate(expr.clone())),
        [] => Err("missing expression".to_owned()),
        more => Err(format!("too many arguments ({})", more.len())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn expression() {
        assert_eq!(
            parse_argv(&argv(&["2 + 3"])),
            Ok(Command::Evaluate("2 + 3".to_owned()))
        );
    }

    #[test]
    fn leading_minus_is_not_a_flag() {
        assert_eq!(
            parse_argv(&argv(&["-5*2"])),
            Ok(Command::Evaluate("-5*2".to_owned()))
        );
    }

    #[test]
    fn self_test() {
        assert_eq!(parse_argv(&argv(&["run_tests"])), Ok(Command::SelfTest));
    }

    #[test]
    fn empty_args() {
        assert!(parse_argv(&argv(&[])).is_err());
    }

    #[test]
    fn too_many() {
        assert_eq!(
            parse_argv(&argv(&["2", "+", "3"])),
            Err("too many arguments (3)".to_owned())
        );
    }
}
