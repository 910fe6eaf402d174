//! Board coordinates.
//!
//! A `Position` is a 0-indexed `(row, col)` pair. It is a plain value type:
//! cheap to copy, hashable, and ordered row-major so it can key maps and sets.

use serde::{Deserialize, Serialize};

/// A tile location on the board, 0-indexed.
///
/// Ordering is row-major: `(0, 3) < (1, 0)`.
///
/// ```
/// use memory_duel::core::Position;
///
/// let p = Position::new(1, 2);
/// assert_eq!(p.row, 1);
/// assert_eq!(p.col, 2);
/// assert_eq!(p.to_string(), "(1, 2)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index on a grid `width` columns wide.
    #[must_use]
    pub const fn flat_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Inverse of [`Position::flat_index`].
    #[must_use]
    pub const fn from_flat_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
