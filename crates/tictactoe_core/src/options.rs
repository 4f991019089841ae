//! Knobs the turn controller honours.

use crate::Marker;
use derive_getters::Getters;
use tracing::instrument;

/// Behaviour options for [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameOptions {
    /// Answer to "Play again?" that starts a new round.
    replay_token: String,
    /// Keep the same names on replay instead of asking again.
    reuse_players: bool,
    /// Marker for player 1; player 2 gets the other one.
    first_marker: Marker,
    /// Print the board after each accepted move.
    show_board_after_move: bool,
}

impl GameOptions {
    /// Creates options.
    #[instrument(skip(replay_token))]
    pub fn new(
        replay_token: impl Into<String>,
        reuse_players: bool,
        first_marker: Marker,
        show_board_after_move: bool,
    ) -> Self {
        Self {
            replay_token: replay_token.into(),
            reuse_players,
            first_marker,
            show_board_after_move,
        }
    }

    /// Sets whether names are reused on replay.
    pub fn with_reuse_players(mut self, reuse_players: bool) -> Self {
        self.reuse_players = reuse_players;
        self
    }

    /// Sets player 1's marker.
    pub fn with_first_marker(mut self, first_marker: Marker) -> Self {
        self.first_marker = first_marker;
        self
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new("y", false, Marker::X, true)
    }
}
