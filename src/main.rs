//! Towers of Hanoi - terminal binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use hanoi::{ExitReason, Orchestrator, StdinSource};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the board drawing on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let mut game = Orchestrator::new(StdinSource::new(), std::io::stdout());
    match game.run(cli.disks)? {
        ExitReason::Finished | ExitReason::Eof => Ok(()),
        ExitReason::RetriesExhausted => std::process::exit(1),
    }
}
