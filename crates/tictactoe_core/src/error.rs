//! Error types for the game engine.

use crate::{Coordinate, Marker};
use derive_more::{Display, Error};
use tracing::instrument;

/// Rejected move. Every variant is recoverable: the same player is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Input was not exactly two characters.
    #[display("Type the coordinates with no spaces, e.g. A1")]
    Syntax,

    /// First character was not a row letter.
    #[display("Enter a valid row letter A-C")]
    InvalidRow,

    /// Second character was not a column number.
    #[display("Enter a valid column 1-3")]
    InvalidColumn,

    /// The target cell already holds a marker.
    #[display("This spot is already filled!")]
    SpotFilled(Coordinate),

    /// The round already has an outcome.
    #[display("The round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// Invalid player setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SetupError {
    /// Both players were given the same marker.
    #[display("Both players cannot use marker {}", _0)]
    DuplicateMarker(Marker),
}

impl std::error::Error for SetupError {}

/// Failure at the terminal boundary, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Failure that stops the turn controller.
#[derive(Debug, Clone, Display, Error, derive_more::From)]
pub enum GameError {
    /// Reading or writing the terminal failed.
    #[display("{}", _0)]
    Console(ConsoleError),
    /// Players could not be seated.
    #[display("{}", _0)]
    Setup(SetupError),
}
