//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .flatten()
        .all(|cell| *cell != Cell::Empty)
}
