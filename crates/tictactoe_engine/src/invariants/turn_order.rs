//! Turn order invariant: the player to move follows from the board.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: while the game is in progress, X is to move exactly when
/// both players have the same number of marks.
///
/// Once the game is over the player is frozen on the last mover, so the
/// check only applies to games in progress.
pub struct TurnOrderInvariant;

impl Invariant<GameEngine> for TurnOrderInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.is_over() {
            return true;
        }
        let board = engine.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
