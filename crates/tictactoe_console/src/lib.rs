//! Terminal front end for two-player tic-tac-toe.
//!
//! Parses the command line, layers configuration and runs a
//! [`tictactoe_core::Game`] over stdin and stdout.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
mod terminal;

pub use cli::{Cli, MarkerArg};
pub use config::{
    config_path, load_config, load_config_from, resolve_config_path, ConfigError, GameConfig,
    CONFIG_ENV,
};
pub use terminal::TerminalConsole;
