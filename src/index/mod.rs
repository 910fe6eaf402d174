//! Ordered index of tile values still in play.
//!
//! The opponent consults this index before trusting its recall: a value
//! it remembers twice is only worth revealing while the value is still on
//! the board. The index is a skip list behind a plain set API; tower
//! heights are an internal detail of [`SkipSet`].

mod skip_set;

pub use skip_set::{Iter, SkipSet, MAX_HEIGHT};

use crate::core::TileValue;

/// Set of tile values with at least one unmatched instance on the board.
pub type OrderedValueIndex = SkipSet<TileValue>;
