//! Tic-tac-toe terminal host.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::{HostConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let summary = Session::new(config, std::io::stdin().lock(), std::io::stdout().lock()).run()?;

    info!(games = summary.games_played(), "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<HostConfig> {
    let mut config = HostConfig::load_or_default(&cli.config)?;

    if cli.no_replay {
        info!("Replay disabled from the command line");
        config = config.with_offer_replay(false);
    }

    Ok(config)
}
