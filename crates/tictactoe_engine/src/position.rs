//! Validated board coordinates.

use crate::error::InvalidPosition;
use crate::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, with `row` and `col` both in `0..=2`.
///
/// The only way to build one from untrusted numbers is [`Position::new`],
/// so every `Position` held by the engine is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Self = Self::at(0, 0);
    /// Top-center (0, 1)
    pub const TOP_CENTER: Self = Self::at(0, 1);
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Self = Self::at(0, 2);
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Self = Self::at(1, 0);
    /// Center (1, 1)
    pub const CENTER: Self = Self::at(1, 1);
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Self = Self::at(1, 2);
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Self = Self::at(2, 0);
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Self = Self::at(2, 1);
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Self = Self::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::CENTER,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    /// Creates a position from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `row` or `col` is outside `0..=2`.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Result<Self, InvalidPosition> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(InvalidPosition::new(row, col));
        }
        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index, 0 at the top.
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index, 0 on the left.
    pub const fn col(self) -> usize {
        self.col
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            (row, col) => unreachable!("position ({row}, {col}) is off the board"),
        }
    }
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = InvalidPosition;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_board_coordinates() {
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::new(row, col).unwrap();
                assert_eq!((pos.row(), pos.col()), (row, col));
            }
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Position::new(3, 0).unwrap_err();
        assert_eq!((err.row, err.col), (3, 0));
        assert!(Position::new(0, 3).is_err());
        assert!(Position::new(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Position::from_index(0), Some(Position::TOP_LEFT));
        assert_eq!(Position::from_index(5), Some(Position::MIDDLE_RIGHT));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_every_position_has_its_own_label() {
        let labels: std::collections::HashSet<_> =
            Position::ALL.iter().map(|pos| pos.label()).collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(Position::BOTTOM_RIGHT.label(), "Bottom-right");
        assert_eq!(Position::BOTTOM_CENTER.label(), "Bottom-center");
        assert_eq!(Position::MIDDLE_LEFT.to_string(), "(1, 0)");
    }
}
