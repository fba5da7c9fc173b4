//! Binary crate for the `weatherbook` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - The interactive add/query/clear session

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod prompt;
mod session;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    let filter = if cmd.verbose { EnvFilter::new("debug") } else { EnvFilter::from_default_env() };
    // Logs go to stderr so they don't mix with prompt output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    cmd.run()
}
