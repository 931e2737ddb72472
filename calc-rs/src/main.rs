use calc::cli::{self, Command};
use calc::config::Config;
use calc::{expr, report, selftest};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(config: &Config) {
    // Logs go to stderr; stdout carries only results.
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(calc::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    let command = match cli::parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("calc: {e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    match command {
        Command::SelfTest => {
            let summary = selftest::run();
            let color = config.color.enabled(report::stdout_is_tty());
            println!("{}", report::summary(&summary, color));
            if !summary.all_passed() {
                std::process::exit(1);
            }
        }
        Command::Evaluate(input) => match expr::calculate(&input) {
            Ok(calc) => println!("{}", report::calculation(&input, &calc)),
            Err(e) => {
                debug!(input = %input, error = ?e, "evaluation failed");
                eprintln!("calc: {e}");
                std::process::exit(1);
            }
        },
    }
}
