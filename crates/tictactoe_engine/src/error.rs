//! Engine error types.

use derive_more::{Display, Error};

/// Coordinates outside the 3x3 board.
///
/// This is a caller bug, not a game event: a presentation layer should only
/// ever pass coordinates taken from its own 3x3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Invalid position ({}, {}): row and column must be in 0..=2, at {}:{}",
    row,
    col,
    file,
    line
)]
pub struct InvalidPosition {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidPosition {
    /// Creates a new invalid position error with caller location tracking.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            row,
            col,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
