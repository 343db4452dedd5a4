//! Status consistency invariant: the reported status matches the board.

use super::Invariant;
use crate::rules::{is_full, winner};
use crate::{GameEngine, GameStatus};

/// Invariant: the engine's incremental status agrees with a full scan of
/// all 8 lines.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = match winner(board) {
            Some(player) => GameStatus::Won(player),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        engine.status() == expected
    }

    fn description() -> &'static str {
        "Status matches the board (win over draw over in progress)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Player, Position};

    #[test]
    fn test_won_game_holds() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            engine.attempt_move(row, col).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert!(StatusConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_missed_win_violates() {
        let mut board = Board::new();
        for pos in [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT] {
            board.set(pos, Cell::Marked(Player::X));
        }
        let engine = GameEngine::from_parts(board, Player::O, GameStatus::InProgress);
        assert!(!StatusConsistentInvariant::holds(&engine));
    }
}
