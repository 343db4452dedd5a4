//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// Every line that wins when uniformly marked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // Columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

const MAIN_DIAGONAL: [Position; 3] = LINES[6];
const ANTI_DIAGONAL: [Position; 3] = LINES[7];

fn line_marked_by(board: &Board, line: [Position; 3], player: Player) -> bool {
    line.iter().all(|pos| board.get(*pos) == Cell::Marked(player))
}

/// Checks whether `player` holds all three cells in the row through `through`.
pub fn row_complete(board: &Board, through: Position, player: Player) -> bool {
    board.rows()[through.row()]
        .iter()
        .all(|cell| *cell == Cell::Marked(player))
}

/// Checks whether `player` holds all three cells in the column through `through`.
pub fn column_complete(board: &Board, through: Position, player: Player) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row[through.col()] == Cell::Marked(player))
}

/// Checks whether `player` holds (0,0), (1,1) and (2,2).
pub fn main_diagonal_complete(board: &Board, player: Player) -> bool {
    line_marked_by(board, MAIN_DIAGONAL, player)
}

/// Checks whether `player` holds (0,2), (1,1) and (2,0).
pub fn anti_diagonal_complete(board: &Board, player: Player) -> bool {
    line_marked_by(board, ANTI_DIAGONAL, player)
}

/// Checks whether the mark `player` just placed at `last_move` wins.
///
/// Only the row and column through `last_move` are inspected, but both
/// diagonals are always checked whether or not `last_move` lies on them.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, last_move: Position, player: Player) -> bool {
    row_complete(board, last_move, player)
        || column_complete(board, last_move, player)
        || main_diagonal_complete(board, player)
        || anti_diagonal_complete(board, player)
}

/// Scans all 8 lines for a winner.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Marked(player) if cell == board.get(b) && cell == board.get(c) => Some(player),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Cell::Marked(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
        );
        assert_eq!(winner(&board), Some(Player::X));
        assert!(row_complete(&board, Position::TOP_RIGHT, Player::X));
        assert!(!row_complete(&board, Position::TOP_LEFT, Player::O));
        assert!(!row_complete(&board, Position::CENTER, Player::X));
        assert!(completes_line(&board, Position::TOP_CENTER, Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::O,
            &[Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
        );
        assert_eq!(winner(&board), Some(Player::O));
        assert!(column_complete(&board, Position::TOP_RIGHT, Player::O));
        assert!(!column_complete(&board, Position::TOP_LEFT, Player::O));
        assert!(completes_line(&board, Position::MIDDLE_RIGHT, Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::O,
            &[Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
        );
        assert_eq!(winner(&board), Some(Player::O));
        assert!(main_diagonal_complete(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
        );
        assert_eq!(winner(&board), Some(Player::X));
        assert!(anti_diagonal_complete(&board, Player::X));
    }

    #[test]
    fn test_diagonals_checked_for_off_diagonal_move() {
        // TOP_CENTER is on neither diagonal, yet the completed main
        // diagonal still counts.
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
        );
        assert!(completes_line(&board, Position::TOP_CENTER, Player::X));
    }

    #[test]
    fn test_line_checks_cover_every_position() {
        // Checks take a validated Position, so every reachable input is on the board.
        let mut board = Board::new();
        mark(&mut board, Player::X, &Position::ALL);
        for pos in Position::ALL {
            assert!(row_complete(&board, pos, Player::X));
            assert!(column_complete(&board, pos, Player::X));
            assert!(!row_complete(&Board::new(), pos, Player::X));
            assert!(!column_complete(&Board::new(), pos, Player::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[Position::TOP_LEFT, Position::TOP_CENTER]);
        assert_eq!(winner(&board), None);
        assert!(!completes_line(&board, Position::TOP_CENTER, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[Position::TOP_LEFT, Position::TOP_CENTER]);
        mark(&mut board, Player::O, &[Position::TOP_RIGHT]);
        assert_eq!(winner(&board), None);
    }
}
