//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Cross.
    #[display("X")]
    X,
    /// Nought.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Character drawn on the board for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a marker for the rest of the round.
    Marked(Marker),
}

impl Cell {
    /// Sentinel drawn for empty cells.
    pub const EMPTY_SYMBOL: char = '_';

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character drawn on the board for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_SYMBOL,
            Cell::Marked(marker) => marker.symbol(),
        }
    }
}

/// Row label on the board, top to bottom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Row {
    /// Top row.
    #[display("A")]
    A,
    /// Middle row.
    #[display("B")]
    B,
    /// Bottom row.
    #[display("C")]
    C,
}

impl Row {
    /// Parses an uppercase row letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Row::A),
            'B' => Some(Row::B),
            'C' => Some(Row::C),
            _ => None,
        }
    }

    /// Zero-based index of the row.
    pub fn index(self) -> usize {
        match self {
            Row::A => 0,
            Row::B => 1,
            Row::C => 2,
        }
    }

    /// Row for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Row::A),
            1 => Some(Row::B),
            2 => Some(Row::C),
            _ => None,
        }
    }
}
