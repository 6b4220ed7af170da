//! Binary crate for the `wxdesk` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The numbered command menu and its console output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod menu;

/// Filter used when `RUST_LOG` is unset. Recoverable menu errors log below it.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with menu output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    let stdin = std::io::stdin();
    cmd.run(stdin.lock(), std::io::stdout(), std::io::stderr())
}
