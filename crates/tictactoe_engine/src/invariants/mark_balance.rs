//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: X moves first and turns alternate, so the mark counts stay
/// level or X is exactly one ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Mark counts are balanced (X equals O, or X leads by one)"
    }
}
