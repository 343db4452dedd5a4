//! Text rendering of engine state.

use crate::config::HostConfig;
use tictactoe_engine::{Board, GameStatus, Player, Position};

/// Formats the board as a human-readable grid.
///
/// ```text
/// X|.|O
/// -+-+-
/// .|X|.
/// -+-+-
/// .|.|O
/// ```
pub fn render_board(board: &Board, empty_glyph: char) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.mark()
                        .map_or_else(|| empty_glyph.to_string(), |player| player.to_string())
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

/// Describes an accepted move, e.g. `Player X (X) marks Center (1, 1).`
pub fn render_move(player: Player, position: Position, config: &HostConfig) -> String {
    format!(
        "{} ({}) marks {} {}.",
        config.name_of(player),
        player,
        position.label(),
        position
    )
}

/// Describes a status using the configured player names.
pub fn render_status(status: GameStatus, config: &HostConfig) -> String {
    match status {
        GameStatus::InProgress => "Game in progress.".to_string(),
        GameStatus::Won(player) => format!("{} ({}) wins!", config.name_of(player), player),
        GameStatus::Draw => "It's a tie!".to_string(),
    }
}
