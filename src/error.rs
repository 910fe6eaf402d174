//! Setup errors.
//!
//! Only game construction can fail. Once a `TurnEngine` exists every
//! operation is total: invalid selections are ignored, not reported.

use crate::core::TileValue;

/// Precondition violations detected before any game state is built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board {width}x{height} has an empty dimension")]
    EmptyDimension { width: usize, height: usize },

    #[error("board {width}x{height} has more tiles than fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("board {width}x{height} has an odd number of tiles")]
    OddTileCount { width: usize, height: usize },

    #[error("value pool holds {actual} values, board needs {expected}")]
    PoolSizeMismatch { expected: usize, actual: usize },

    #[error("layout holds {actual} tiles, board needs {expected}")]
    LayoutSizeMismatch { expected: usize, actual: usize },

    #[error("{0} appears more than once in the value pool")]
    DuplicateValue(TileValue),

    #[error("{value} appears {count} times in the layout, expected 2")]
    UnpairedValue { value: TileValue, count: usize },
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
