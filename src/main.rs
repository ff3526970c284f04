//! pwd-policy CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PWD_POLICY_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();

    if let Err(e) = cli.execute(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
