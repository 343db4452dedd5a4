//! Parsing typed input lines into host commands.

use tictactoe_engine::Position;
use tracing::instrument;

/// What a line of input asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark the cell at `row`, `col`. The numbers are unchecked.
    Move {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Leave the session.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Answer to the "Play again?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    /// Reset the engine and start another game.
    PlayAgain,
    /// End the session.
    Exit,
}

/// Parses a move line.
///
/// Accepts `row col` (also `row,col`) with zero-based coordinates, or a
/// single keypad number `1`-`9` counted left to right, top to bottom.
/// `q` or `quit` leaves.
#[instrument]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Command::Quit;
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Command::Move { row, col },
            _ => Command::Unrecognized(trimmed.to_string()),
        },
        [number] => match number.parse::<usize>() {
            Ok(n @ 1..=9) => Position::from_index(n - 1)
                .map(|pos| Command::Move {
                    row: pos.row(),
                    col: pos.col(),
                })
                .unwrap_or_else(|| Command::Unrecognized(trimmed.to_string())),
            _ => Command::Unrecognized(trimmed.to_string()),
        },
        _ => Command::Unrecognized(trimmed.to_string()),
    }
}

/// Parses the answer to "Play again?".
///
/// Returns `None` for anything other than yes or no.
#[instrument]
pub fn parse_replay(line: &str) -> Option<ReplayChoice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(ReplayChoice::PlayAgain),
        "n" | "no" | "q" | "quit" => Some(ReplayChoice::Exit),
        _ => None,
    }
}
