//! The game engine: authoritative owner of board and turn state.

use crate::action::{MoveResult, RejectReason};
use crate::error::InvalidPosition;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, GameSnapshot, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board, the player to move and the game status, and is the only
/// thing that decides whether a move is legal and what it leads to. The
/// engine is synchronous and expects a single caller; hosts with several
/// threads must serialize calls themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// Moves after the game ended and moves onto a marked cell are rejected
    /// without touching any state.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `row` or `col` is outside `0..=2`.
    /// The engine state is unchanged.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveResult, InvalidPosition> {
        let position = Position::new(row, col)
            .inspect_err(|e| warn!(error = %e, "Move outside the board"))?;
        Ok(self.play(position))
    }

    /// Places the current player's mark at an already validated position.
    #[instrument(skip_all, fields(position = %position, player = %self.current_player))]
    pub fn play(&mut self, position: Position) -> MoveResult {
        if self.status.is_over() {
            debug!(status = %self.status, "Move rejected");
            return MoveResult::Rejected(RejectReason::GameAlreadyOver);
        }

        if !self.board.is_empty(position) {
            debug!("Move rejected: cell occupied");
            return MoveResult::Rejected(RejectReason::CellOccupied);
        }

        let player = self.current_player;
        self.board.set(position, Cell::Marked(player));
        self.status = rules::evaluate(&self.board, position, player);

        match self.status {
            GameStatus::InProgress => {
                self.current_player = player.opponent();
                debug!(next = %self.current_player, "Move accepted");
            }
            GameStatus::Won(winner) => info!(%winner, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        MoveResult::Accepted {
            status: self.status,
            player,
        }
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Returns a copy of the board, player to move and status.
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot::new(self.board, self.current_player, self.status)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the positions that would be accepted right now.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_positions()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, current_player: Player, status: GameStatus) -> Self {
        Self {
            board,
            current_player,
            status,
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in violations {
                tracing::error!(description = %violation.description, "Engine invariant violated");
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_accepted_move_flips_player() {
        let mut engine = GameEngine::new();
        let result = engine.attempt_move(1, 1).unwrap();
        assert_eq!(
            result,
            MoveResult::Accepted {
                status: GameStatus::InProgress,
                player: Player::X
            }
        );
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.board().get(Position::CENTER), Cell::Marked(Player::X));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = GameEngine::new();
        engine.attempt_move(0, 0).unwrap();
        let before = engine.clone();

        let result = engine.attempt_move(0, 0).unwrap();
        assert_eq!(result, MoveResult::Rejected(RejectReason::CellOccupied));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_game_over_checked_before_occupied() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.attempt_move(row, col).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Won(Player::X));

        let result = engine.attempt_move(0, 0).unwrap();
        assert_eq!(result, MoveResult::Rejected(RejectReason::GameAlreadyOver));
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_current_player_frozen_after_win() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.attempt_move(row, col).unwrap();
        }
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut engine = GameEngine::new();
        let err = engine.attempt_move(3, 0).unwrap_err();
        assert_eq!((err.row, err.col), (3, 0));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new();
        engine.attempt_move(2, 2).unwrap();
        engine.reset();
        assert_eq!(engine, GameEngine::new());
    }
}
