//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coordinate, Marker};
use tracing::instrument;

/// The eight winning lines as zero-based (row, col) triples.
///
/// Rows first, then columns, then the two diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `marker` occupies all three cells of any line.
///
/// Stops at the first complete line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, marker: Marker) -> bool {
    let target = Cell::Marked(marker);
    LINES.iter().any(|line| {
        line.iter().all(|&(row, col)| {
            Coordinate::new(row, col).is_some_and(|coord| board.get(coord) == target)
        })
    })
}
