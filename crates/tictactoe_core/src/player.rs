//! Named participant bound to one marker.

use crate::{Board, Coordinate, Marker, MoveError};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player: display name plus the marker they place.
///
/// Holds no board state; the round lends its board for each placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Name shown in prompts and announcements, used verbatim.
    #[new(into)]
    name: String,
    /// Marker fixed for the whole round.
    marker: Marker,
}

impl Player {
    /// Places this player's marker on `board`.
    ///
    /// Returns whatever [`Board::mark`] returns.
    #[instrument(skip(self, board), fields(player = %self.name, marker = %self.marker))]
    pub fn place_marker(&self, board: &mut Board, coord: Coordinate) -> Result<(), MoveError> {
        board.mark(coord, self.marker)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_place_marker_uses_own_marker() {
        let mut board = Board::new();
        let player = Player::new("Ada", Marker::O);
        let coord = Coordinate::parse("C1").expect("valid coordinate");

        player.place_marker(&mut board, coord).expect("empty cell");
        assert_eq!(board.get(coord), Cell::Marked(Marker::O));
    }

    #[test]
    fn test_place_marker_forwards_failure() {
        let mut board = Board::new();
        let coord = Coordinate::parse("A2").expect("valid coordinate");
        Player::new("Ada", Marker::X)
            .place_marker(&mut board, coord)
            .expect("empty cell");

        let result = Player::new("Grace", Marker::O).place_marker(&mut board, coord);
        assert_eq!(result, Err(MoveError::SpotFilled(coord)));
        assert_eq!(board.get(coord), Cell::Marked(Marker::X));
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::new("Ada", Marker::X).to_string(), "Ada (X)");
    }
}
