//! Full-board detection.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells hold a marker).
///
/// A full board is a tie only when neither marker has a line.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|cell| !cell.is_empty())
}
