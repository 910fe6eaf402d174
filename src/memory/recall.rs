//! Opponent recall: tile value → positions seen showing that value.
//!
//! Every reveal is recorded, whoever flipped the tile. When the opponent's
//! own pair attempt fails it forgets those two sightings, so its memory is
//! deliberately imperfect. Matched pairs are pruned as they leave play.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Position, TileValue};
use crate::index::OrderedValueIndex;

/// Positions remembered for one value, in the order they were seen.
///
/// Two inline slots cover the common case: each value sits on exactly two tiles.
pub type RecallSet = SmallVec<[Position; 2]>;

/// Mapping from tile value to the positions the opponent has seen it at.
///
/// Entries never hold an empty recall set.
#[derive(Clone, Debug, Default)]
pub struct OpponentMemory {
    recall: FxHashMap<TileValue, RecallSet>,
}

impl OpponentMemory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values with at least one remembered position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recall.len()
    }

    /// True if nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recall.is_empty()
    }

    /// Positions remembered for `value`, oldest first.
    #[must_use]
    pub fn recalled(&self, value: TileValue) -> &[Position] {
        match self.recall.get(&value) {
            Some(positions) => positions,
            None => &[],
        }
    }

    /// Remember that `value` was seen at `position`.
    ///
    /// Seeing the same tile again does not add a second entry.
    pub fn record(&mut self, value: TileValue, position: Position) {
        let positions = self.recall.entry(value).or_default();
        if !positions.contains(&position) {
            positions.push(position);
            log::debug!("opponent recalls {} at {}", value, position);
        }
    }

    /// Drop each of `positions` from the recall set for `value`.
    ///
    /// The entry disappears once its recall set is empty.
    pub fn forget(&mut self, value: TileValue, positions: &[Position]) {
        let Some(recalled) = self.recall.get_mut(&value) else {
            return;
        };
        recalled.retain(|p| !positions.contains(p));
        if recalled.is_empty() {
            self.recall.remove(&value);
        }
        log::debug!("opponent forgets {} at {:?}", value, positions);
    }

    /// A value remembered at two or more positions that is still in play.
    ///
    /// Returns the first two positions remembered for it. When several values
    /// qualify the smallest value wins, so the choice is stable regardless of
    /// hash order.
    #[must_use]
    pub fn find_known_pair(&self, index: &OrderedValueIndex) -> Option<(Position, Position)> {
        self.recall
            .iter()
            .filter(|(value, positions)| positions.len() >= 2 && index.contains(value))
            .min_by_key(|(value, _)| **value)
            .map(|(_, positions)| (positions[0], positions[1]))
    }
}
