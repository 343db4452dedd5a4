//! Command-line interface for the tic-tac-toe host.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the host config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Exit after the first finished game instead of offering a replay
    #[arg(long)]
    pub no_replay: bool,
}
