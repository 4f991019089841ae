//! Tic-tac-toe for two players sharing a terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_console::{load_config, Cli, TerminalConsole};
use tictactoe_core::Game;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();
    run(cli)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).context("Failed to load configuration")?;
    info!(?config, "Starting tic-tac-toe");

    let mut game = Game::new(config.to_options());
    let mut console = TerminalConsole::stdio();
    let summary = game.run(&mut console).context("Game session failed")?;

    info!(
        rounds = summary.rounds(),
        ties = summary.ties(),
        "Goodbye"
    );
    Ok(())
}
