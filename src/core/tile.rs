//! Tile values: the symbol a face-down tile conceals.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a pairable symbol.
///
/// The engine only compares values for equality and order; what a value
/// looks like on screen is up to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileValue(pub u32);

impl TileValue {
    /// Create a new tile value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// A pool of `count` distinct values, `0..count`.
    ///
    /// ```
    /// use memory_duel::core::TileValue;
    ///
    /// let pool = TileValue::pool(8);
    /// assert_eq!(pool.len(), 8);
    /// assert_eq!(pool[7], TileValue::new(7));
    /// ```
    #[must_use]
    pub fn pool(count: usize) -> Vec<TileValue> {
        (0..count as u32).map(TileValue).collect()
    }
}

impl std::fmt::Display for TileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_value() {
        let v = TileValue::new(5);
        assert_eq!(v.raw(), 5);
        assert_eq!(format!("{}", v), "Tile(5)");
    }

    #[test]
    fn test_pool_is_distinct() {
        let pool = TileValue::pool(18);
        let distinct: std::collections::BTreeSet<_> = pool.iter().copied().collect();
        assert_eq!(pool.len(), 18);
        assert_eq!(distinct.len(), 18);
    }
}
