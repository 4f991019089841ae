//! One round of play: board, two players and whose turn it is.

use crate::{Board, Coordinate, MoveError, Player, SetupError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which of the two fixed players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player 1, moves first.
    First,
    /// Player 2.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Win(Player),
    /// The board filled up with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "Game over! {} wins!", player.name()),
            Outcome::Tie => write!(f, "Game over! It's a tie."),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Round continues; `next` is now active.
    Continue {
        /// Seat that moves next.
        next: Seat,
    },
    /// The mover completed a line.
    Won(Player),
    /// The mover filled the last cell without a line.
    Tie,
}

/// Pure turn logic for a single round.
///
/// Owns the board. Rejected input never changes the board or the active seat;
/// once an outcome is set the board is frozen.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    players: [Player; 2],
    active: Seat,
    outcome: Option<Outcome>,
    moves: Vec<Coordinate>,
}

impl Round {
    /// Starts a round on a fresh board with `first` to move.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateMarker`] if both players share a marker.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, SetupError> {
        if first.marker() == second.marker() {
            return Err(SetupError::DuplicateMarker(*first.marker()));
        }
        info!("Round started");
        Ok(Self {
            board: Board::new(),
            players: [first, second],
            active: Seat::First,
            outcome: None,
            moves: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the seat whose move is awaited.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose move is awaited.
    pub fn active(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the outcome once the round is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns accepted moves in order.
    pub fn moves(&self) -> &[Coordinate] {
        &self.moves
    }

    /// Parses `input` and plays it for the active player.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`]; the active player stays the same.
    #[instrument(skip(self), fields(player = %self.active().name()))]
    pub fn submit(&mut self, input: &str) -> Result<Turn, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::RoundOver);
        }
        let coord = Coordinate::parse(input)?;
        self.play(coord)
    }

    /// Plays an already validated coordinate for the active player.
    ///
    /// Win is checked before tie, so a full board with a line is a win.
    ///
    /// # Errors
    ///
    /// [`MoveError::SpotFilled`] or [`MoveError::RoundOver`].
    #[instrument(skip(self))]
    pub fn play(&mut self, coord: Coordinate) -> Result<Turn, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::RoundOver);
        }

        let mover = &self.players[self.active.index()];
        mover.place_marker(&mut self.board, coord)?;
        self.moves.push(coord);
        debug!(%coord, filled = self.board.filled_count(), "Move accepted");

        if self.board.is_win(*mover.marker()) {
            let winner = mover.clone();
            info!(winner = %winner.name(), moves = self.moves.len(), "Round won");
            self.outcome = Some(Outcome::Win(winner.clone()));
            return Ok(Turn::Won(winner));
        }

        if self.board.is_tie() {
            info!("Round tied");
            self.outcome = Some(Outcome::Tie);
            return Ok(Turn::Tie);
        }

        self.active = self.active.other();
        Ok(Turn::Continue { next: self.active })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    fn round() -> Round {
        Round::new(Player::new("Ada", Marker::X), Player::new("Grace", Marker::O))
            .expect("distinct markers")
    }

    #[test]
    fn test_rejects_duplicate_markers() {
        let result = Round::new(Player::new("Ada", Marker::O), Player::new("Grace", Marker::O));
        assert!(matches!(result, Err(SetupError::DuplicateMarker(Marker::O))));
    }

    #[test]
    fn test_first_seat_moves_first() {
        let round = round();
        assert_eq!(round.active_seat(), Seat::First);
        assert_eq!(round.active().name(), "Ada");
        assert_eq!(round.board(), &Board::new());
    }

    #[test]
    fn test_rejected_input_keeps_turn() {
        let mut round = round();
        for bad in ["", "A", "D1", "A9", "a1"] {
            assert!(round.submit(bad).is_err());
            assert_eq!(round.active_seat(), Seat::First);
        }
        assert_eq!(round.board().filled_count(), 0);
    }

    #[test]
    fn test_occupied_spot_keeps_turn() {
        let mut round = round();
        round.submit("B2").expect("valid move");
        let err = round.submit("B2").expect_err("spot taken");
        assert_eq!(err.to_string(), "This spot is already filled!");
        assert_eq!(round.active_seat(), Seat::Second);
        assert_eq!(round.moves().len(), 1);
    }

    #[test]
    fn test_outcome_display() {
        let win = Outcome::Win(Player::new("Ada", Marker::X));
        assert_eq!(win.to_string(), "Game over! Ada wins!");
        assert_eq!(Outcome::Tie.to_string(), "Game over! It's a tie.");
        assert!(Outcome::Tie.is_tie());
        assert_eq!(win.winner().map(|p| p.name().as_str()), Some("Ada"));
    }
}
