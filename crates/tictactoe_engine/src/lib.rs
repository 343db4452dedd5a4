//! Tic-tac-toe game engine.
//!
//! Pure game logic with no rendering and no I/O. A presentation layer owns
//! input and display and talks to the engine only through [`GameEngine`]:
//!
//! - [`GameEngine::attempt_move`] places the current player's mark
//! - [`GameEngine::reset`] starts a fresh game
//! - [`GameEngine::current_state`] returns a [`GameSnapshot`] for rendering
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, MoveResult, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::InvalidPosition> {
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.attempt_move(row, col)?;
//! }
//! let result = engine.attempt_move(0, 2)?;
//! assert_eq!(
//!     result,
//!     MoveResult::Accepted { status: GameStatus::Won(Player::X), player: Player::X }
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{MoveResult, RejectReason};
pub use engine::GameEngine;
pub use error::InvalidPosition;
pub use invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    StatusConsistentInvariant, TurnOrderInvariant,
};
pub use position::Position;
pub use types::{BOARD_SIZE, Board, Cell, GameSnapshot, GameStatus, Player};
