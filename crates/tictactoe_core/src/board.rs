//! The 3×3 grid and its rendering.

use crate::{rules, Cell, Coordinate, Marker, MoveError, Row};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Sole owner of the grid. A cell that holds a marker is never overwritten
/// or cleared; a fresh board is built for every round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, row A first.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Returns all rows of the grid.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of cells holding a marker.
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Places `marker` at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SpotFilled`] if the cell already holds a marker.
    /// The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn mark(&mut self, coord: Coordinate, marker: Marker) -> Result<(), MoveError> {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if !cell.is_empty() {
            debug!(existing = ?cell, "Spot already filled");
            return Err(MoveError::SpotFilled(coord));
        }
        *cell = Cell::Marked(marker);
        Ok(())
    }

    /// Checks whether `marker` fills a whole row, column or diagonal.
    pub fn is_win(&self, marker: Marker) -> bool {
        rules::has_line(self, marker)
    }

    /// Checks whether every cell holds a marker.
    ///
    /// A full board may still contain a winning line; check [`Board::is_win`] first.
    pub fn is_tie(&self) -> bool {
        rules::is_full(self)
    }

    /// Formats the board with a column header and row letters.
    ///
    /// ```text
    ///   1 2 3
    /// A X|_|_
    /// B _|O|_
    /// C _|_|_
    /// ```
    pub fn render(&self) -> String {
        let mut lines = vec![String::from("  1 2 3")];
        for (row, cells) in Row::iter().zip(self.cells.iter()) {
            let symbols: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            lines.push(format!("{} {}", row, symbols.join("|")));
        }
        lines.join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
