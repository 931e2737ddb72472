//! Runtime settings read from the environment.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `CALC_LOG` | `tracing` filter directive, e.g. `calc=debug` (default `warn`) |
//! | `CALC_COLOR` | `always`, `never`, or `auto` (default) for self-test output |
//! | `NO_COLOR` | any non-empty value disables colour, unless `CALC_COLOR=always` |

/// Default log filter when `CALC_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// When to colour console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether stdout is a terminal.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Auto => is_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            color: ColorChoice::Auto,
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build settings from `(name, value)` pairs (exposed for testing).
    ///
    /// Unrecognised `CALC_COLOR` values fall back to `auto`.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();
        let mut no_color = false;
        let mut explicit_color = None;

        for (k, v) in vars {
            let v = v.as_ref().trim();
            match k.as_ref() {
                "CALC_LOG" if !v.is_empty() => config.log_filter = v.to_owned(),
                "NO_COLOR" => no_color = !v.is_empty(),
                "CALC_COLOR" => {
                    explicit_color = Some(match v.to_ascii_lowercase().as_str() {
                        "always" => ColorChoice::Always,
                        "never" => ColorChoice::Never,
                        _ => ColorChoice::Auto,
                    })
                }
                _ => {}
            }
        }

        config.color = match explicit_color {
            Some(ColorChoice::Always) => ColorChoice::Always,
            _ if no_color => ColorChoice::Never,
            Some(choice) => choice,
            None => ColorChoice::Auto,
        };
        config
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
