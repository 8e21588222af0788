use std::fmt::{Display, Formatter};

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Offset of this cell in a row-major board of side `dimension`.
    pub fn index(&self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }

    /// Inverse of [`Position::index`]. `dimension` must be non-zero.
    pub(crate) fn from_index(index: usize, dimension: usize) -> Position {
        Position::new(index / dimension, index % dimension)
    }

    /// True when the two cells touch horizontally, vertically or diagonally.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self != other
            && self.row.abs_diff(other.row) <= 1
            && self.col.abs_diff(other.col) <= 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
