//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player whose mark occupies this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its position in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Marked(player))
            .count()
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Read-only copy of the engine state, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Player whose turn it is (frozen once the game is over).
    current_player: Player,
    /// Game status.
    status: GameStatus,
}
