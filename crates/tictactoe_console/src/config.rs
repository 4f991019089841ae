//! Game configuration: TOML file, environment, command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tictactoe_core::{GameOptions, Marker};
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Answer to "Play again?" that starts a new round.
    #[serde(default = "default_replay_token")]
    replay_token: String,

    /// Keep player names on replay instead of asking again.
    #[serde(default)]
    reuse_players: bool,

    /// Marker for player 1 ("X" or "O").
    #[serde(default = "default_first_marker")]
    first_marker: Marker,

    /// Print the board after each accepted move.
    #[serde(default = "default_show_board_after_move")]
    show_board_after_move: bool,
}

fn default_replay_token() -> String {
    "y".to_string()
}

fn default_first_marker() -> Marker {
    Marker::X
}

fn default_show_board_after_move() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            replay_token: default_replay_token(),
            reuse_players: false,
            first_marker: default_first_marker(),
            show_board_after_move: default_show_board_after_move(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self, cli))]
    pub fn apply_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if cli.reuse_players {
            self.reuse_players = true;
        } else if cli.no_reuse_players {
            self.reuse_players = false;
        }
        if let Some(marker) = cli.first_marker {
            self.first_marker = marker.into();
        }
        if let Some(token) = &cli.replay_token {
            self.replay_token = token.clone();
        }
        self.validate()?;
        Ok(self)
    }

    /// Converts into the options the game engine reads.
    pub fn to_options(&self) -> GameOptions {
        GameOptions::new(
            self.replay_token.clone(),
            self.reuse_players,
            self.first_marker,
            self.show_board_after_move,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.replay_token.is_empty() {
            return Err(ConfigError::new("replay_token must not be empty".to_string()));
        }
        if self.replay_token.contains(['\n', '\r']) {
            return Err(ConfigError::new(
                "replay_token must fit on one line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolves the config file path: `--config`, then `$TICTACTOE_CONFIG`.
pub fn config_path(cli: &Cli) -> Option<PathBuf> {
    resolve_config_path(cli, std::env::var_os(CONFIG_ENV))
}

/// Picks `--config` when given, otherwise the value read from `$TICTACTOE_CONFIG`.
///
/// An empty variable counts as unset.
#[instrument(skip(cli))]
pub fn resolve_config_path(cli: &Cli, env_value: Option<OsString>) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        env_value
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Builds the effective configuration for a run.
///
/// Defaults, then the config file if one is named, then command-line flags.
pub fn load_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    load_config_from(cli, config_path(cli))
}

/// Like [`load_config`], with the config file path already resolved.
#[instrument(skip(cli))]
pub fn load_config_from(cli: &Cli, path: Option<PathBuf>) -> Result<GameConfig, ConfigError> {
    let base = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            debug!("No config file, using defaults");
            GameConfig::default()
        }
    };
    base.apply_cli(cli)
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
