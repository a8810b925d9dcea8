//! Command-line interface for hanoi.

use clap::Parser;
use hanoi::MAX_DISKS;

/// Towers of Hanoi in the terminal.
#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Move the tower of disks to the last needle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start the first game with this many disks instead of asking.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_DISKS as i64))]
    pub disks: Option<u32>,
}
