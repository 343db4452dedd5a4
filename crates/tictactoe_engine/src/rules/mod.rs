//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from the
//! engine's state so invariant checks and tests can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, completes_line, winner};

use crate::{Board, GameStatus, Player, Position};
use tracing::instrument;

/// Status of the game right after `player` marked `last_move`.
///
/// A completed line wins even when the same move fills the board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_move: Position, player: Player) -> GameStatus {
    if completes_line(board, last_move, player) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
