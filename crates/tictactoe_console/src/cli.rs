//! Command-line interface for the tictactoe binary.

use clap::{Parser, ValueEnum};
use tictactoe_core::Marker;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $TICTACTOE_CONFIG)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Keep the same player names when playing again
    #[arg(long, overrides_with = "no_reuse_players")]
    pub reuse_players: bool,

    /// Ask for player names again on replay, even if the config file says otherwise
    #[arg(long, overrides_with = "reuse_players")]
    pub no_reuse_players: bool,

    /// Marker for player 1; player 2 gets the other one
    #[arg(long, value_enum, ignore_case = true)]
    pub first_marker: Option<MarkerArg>,

    /// Answer to "Play again?" that starts a new round
    #[arg(long)]
    pub replay_token: Option<String>,
}

/// Marker choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerArg {
    /// Cross
    X,
    /// Nought
    O,
}

impl From<MarkerArg> for Marker {
    fn from(arg: MarkerArg) -> Self {
        match arg {
            MarkerArg::X => Marker::X,
            MarkerArg::O => Marker::O,
        }
    }
}
