//! Board generation and per-tile state.

use rustc_hash::FxHashMap;

use crate::core::{BoardConfig, GameRng, Position, TileValue};
use crate::error::{Result, SetupError};

/// Fixed-size grid of tiles, row-major.
///
/// Created once per game and never resized.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    tiles: Vec<TileValue>,
    revealed: Vec<bool>,
    matched: Vec<bool>,
    /// 1-based display label per value, in setup-pool order.
    labels: FxHashMap<TileValue, usize>,
}

impl Board {
    /// Deal a new board from a pool of distinct values.
    ///
    /// The pool must hold exactly `width * height / 2` values. Each value is
    /// duplicated, the tiles are shuffled uniformly, then laid out row-major.
    ///
    /// ```
    /// use memory_duel::board::Board;
    /// use memory_duel::core::{BoardConfig, GameRng, TileValue};
    ///
    /// let mut rng = GameRng::new(42);
    /// let board = Board::generate(&TileValue::pool(8), BoardConfig::small(), &mut rng).unwrap();
    /// assert_eq!(board.tile_count(), 16);
    ///
    /// // Wrong pool size is a setup error
    /// assert!(Board::generate(&TileValue::pool(7), BoardConfig::small(), &mut rng).is_err());
    /// ```
    pub fn generate(pool: &[TileValue], config: BoardConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        if pool.len() != config.pair_count() {
            return Err(SetupError::PoolSizeMismatch {
                expected: config.pair_count(),
                actual: pool.len(),
            });
        }

        let mut labels = FxHashMap::default();
        for (i, &value) in pool.iter().enumerate() {
            if labels.insert(value, i + 1).is_some() {
                return Err(SetupError::DuplicateValue(value));
            }
        }

        let mut tiles: Vec<TileValue> = pool.iter().chain(pool.iter()).copied().collect();
        rng.shuffle(&mut tiles);

        log::debug!("dealt {} board with {} pairs", config, pool.len());
        Ok(Self::with_tiles(config, tiles, labels))
    }

    /// Build a board from an explicit row-major layout.
    ///
    /// Every value must appear exactly twice. Labels follow ascending value order.
    pub fn from_layout(config: BoardConfig, tiles: Vec<TileValue>) -> Result<Self> {
        config.validate()?;
        if tiles.len() != config.tile_count() {
            return Err(SetupError::LayoutSizeMismatch {
                expected: config.tile_count(),
                actual: tiles.len(),
            });
        }

        let mut counts: FxHashMap<TileValue, usize> = FxHashMap::default();
        for &value in &tiles {
            *counts.entry(value).or_default() += 1;
        }

        let mut values: Vec<_> = counts.into_iter().collect();
        values.sort_unstable();
        if let Some(&(value, count)) = values.iter().find(|(_, count)| *count != 2) {
            return Err(SetupError::UnpairedValue { value, count });
        }

        let labels = values
            .iter()
            .enumerate()
            .map(|(i, &(value, _))| (value, i + 1))
            .collect();

        Ok(Self::with_tiles(config, tiles, labels))
    }

    fn with_tiles(
        config: BoardConfig,
        tiles: Vec<TileValue>,
        labels: FxHashMap<TileValue, usize>,
    ) -> Self {
        let count = tiles.len();
        Self {
            config,
            tiles,
            revealed: vec![false; count],
            matched: vec![false; count],
            labels,
        }
    }

    // === Dimensions ===

    /// Grid dimensions.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.config.height
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of distinct values, i.e. matches needed to finish.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.labels.len()
    }

    /// True if `pos` lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.config.height && pos.col < self.config.width
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.tiles.len()).map(move |i| Position::from_flat_index(i, self.config.width))
    }

    // === Tile state ===

    /// Value under `pos`, or `None` off the grid.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<TileValue> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// True if `pos` is face up (including matched tiles).
    #[must_use]
    pub fn is_revealed(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.revealed[i])
    }

    /// True if `pos` has been resolved and removed from play.
    #[must_use]
    pub fn is_matched(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.matched[i])
    }

    /// True if `pos` is on the grid, face down and unmatched.
    #[must_use]
    pub fn is_selectable(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| !self.revealed[i] && !self.matched[i])
    }

    /// Every position that can currently be selected.
    #[must_use]
    pub fn hidden_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.is_selectable(p)).collect()
    }

    /// Distinct values on the board, ascending.
    #[must_use]
    pub fn values(&self) -> Vec<TileValue> {
        let mut values: Vec<_> = self.labels.keys().copied().collect();
        values.sort_unstable();
        values
    }

    /// Both positions holding `value`.
    #[must_use]
    pub fn positions_of(&self, value: TileValue) -> Vec<Position> {
        self.positions()
            .filter(|&p| self.value_at(p) == Some(value))
            .collect()
    }

    /// 1-based display label for `value`.
    #[must_use]
    pub fn label_of(&self, value: TileValue) -> Option<usize> {
        self.labels.get(&value).copied()
    }

    // === Mutation (driven by the turn engine) ===

    /// Flip `pos` face up. Returns its value, or `None` if it was not selectable.
    pub(crate) fn reveal(&mut self, pos: Position) -> Option<TileValue> {
        if !self.is_selectable(pos) {
            return None;
        }
        let i = self.index(pos)?;
        self.revealed[i] = true;
        Some(self.tiles[i])
    }

    /// Flip `pos` face down unless it is matched.
    pub(crate) fn conceal(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            if !self.matched[i] {
                self.revealed[i] = false;
            }
        }
    }

    /// Remove `pos` from play. Leaves it face up.
    pub(crate) fn mark_matched(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.revealed[i] = true;
            self.matched[i] = true;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.flat_index(self.config.width))
    }
}
