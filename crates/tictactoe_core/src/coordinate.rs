//! Board coordinates and parsing of typed coordinates like `B2`.

use crate::{MoveError, Row};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Zero-based (row, column) position on the board.
///
/// Values are always inside the 3×3 grid; the only ways to build one are
/// [`Coordinate::new`], [`Coordinate::from_row`], parsing and deserializing,
/// which goes through the same bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CoordinateParts")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Coordinate`].
#[derive(Deserialize)]
struct CoordinateParts {
    row: usize,
    col: usize,
}

impl TryFrom<CoordinateParts> for Coordinate {
    type Error = MoveError;

    fn try_from(parts: CoordinateParts) -> Result<Self, Self::Error> {
        if parts.row >= 3 {
            return Err(MoveError::InvalidRow);
        }
        Self::new(parts.row, parts.col).ok_or(MoveError::InvalidColumn)
    }
}

impl Coordinate {
    /// Creates a coordinate from zero-based indices, or `None` when off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row label and a zero-based column.
    pub fn from_row(row: Row, col: usize) -> Option<Self> {
        Self::new(row.index(), col)
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Index into a row-major array of nine cells.
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// Parses typed input such as `A1`.
    ///
    /// Checks run in order and the first failure wins:
    /// length must be exactly two characters, the first must be a row letter
    /// `A`-`C`, the second must be a column number `1`-`3`. Anything that is
    /// not a digit counts as out of range.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let mut chars = input.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            debug!(len = input.chars().count(), "Rejected coordinate length");
            return Err(MoveError::Syntax);
        };

        let row = Row::from_letter(row).ok_or(MoveError::InvalidRow)?;

        let col = col.to_digit(10).unwrap_or(0) as usize;
        if !(1..=3).contains(&col) {
            return Err(MoveError::InvalidColumn);
        }

        Self::from_row(row, col - 1).ok_or(MoveError::InvalidColumn)
    }
}

impl FromStr for Coordinate {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const ROW_LETTERS: [char; 3] = ['A', 'B', 'C'];
        write!(f, "{}{}", ROW_LETTERS[self.row], self.col + 1)
    }
}
