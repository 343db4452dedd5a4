//! Results of move attempts.
//!
//! A rejected move is a normal outcome of user interaction (a double click,
//! a click after the game ended), so it is a result variant rather than an
//! error. Only coordinates off the board are errors.

use crate::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The game already ended in a win or draw.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The target cell already carries a mark.
    #[display("Cell is already occupied")]
    CellOccupied,
}

/// Outcome of [`GameEngine::attempt_move`](crate::GameEngine::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed.
    Accepted {
        /// Status after the move.
        status: GameStatus,
        /// Player who just moved.
        player: Player,
    },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// Returns the resulting status for an accepted move.
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            MoveResult::Accepted { status, .. } => Some(*status),
            MoveResult::Rejected(_) => None,
        }
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::Accepted { status, player } => {
                write!(f, "Player {} moved. {}", player, status)
            }
            MoveResult::Rejected(reason) => write!(f, "Move rejected: {}", reason),
        }
    }
}
