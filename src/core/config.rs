//! Game configuration types.
//!
//! A game is configured at setup by providing:
//! - `BoardConfig`: grid dimensions
//! - `PacingConfig`: how long reveals stay on screen
//! - `GameConfig`: combines both with an optional seed
//!
//! Configuration is validated before any game state is built.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::SetupError;

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl BoardConfig {
    /// Create a new board configuration.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// 4×4 grid, 8 pairs.
    #[must_use]
    pub const fn small() -> Self {
        Self::new(4, 4)
    }

    /// 6×6 grid, 18 pairs.
    #[must_use]
    pub const fn medium() -> Self {
        Self::new(6, 6)
    }

    /// 8×8 grid, 32 pairs.
    #[must_use]
    pub const fn large() -> Self {
        Self::new(8, 8)
    }

    /// Total number of tiles. Saturates on dimensions `validate` rejects.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of distinct values needed to fill the grid.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.tile_count() / 2
    }

    /// Check the grid can be tiled with pairs.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.width == 0 || self.height == 0 {
            return Err(SetupError::EmptyDimension {
                width: self.width,
                height: self.height,
            });
        }
        let Some(count) = self.width.checked_mul(self.height) else {
            return Err(SetupError::TooLarge {
                width: self.width,
                height: self.height,
            });
        };
        if count % 2 != 0 {
            return Err(SetupError::OddTileCount {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::medium()
    }
}

impl std::fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed waits imposed by the presentation loop.
///
/// The engine never sleeps; these only drive a `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Opponent "thinking time" before it reveals.
    pub computer_think: Duration,

    /// How long the opponent's two reveals stay up before resolution.
    pub reveal_window: Duration,

    /// How long a failed human pair stays up before flipping back.
    pub mismatch_revert: Duration,

    /// Hold on the final board once the last pair is found.
    pub game_over_hold: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            computer_think: Duration::from_millis(1000),
            reveal_window: Duration::from_millis(1000),
            mismatch_revert: Duration::from_millis(500),
            game_over_hold: Duration::from_millis(5000),
        }
    }
}

impl PacingConfig {
    /// All waits zero, for headless play and tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            computer_think: Duration::ZERO,
            reveal_window: Duration::ZERO,
            mismatch_revert: Duration::ZERO,
            game_over_hold: Duration::ZERO,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid dimensions.
    pub board: BoardConfig,

    /// Seed for the deal and the opponent's guesses.
    /// `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Presentation waits.
    pub pacing: PacingConfig,
}

impl GameConfig {
    /// Create a config for the given grid with default pacing.
    #[must_use]
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set custom pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(BoardConfig::small().pair_count(), 8);
        assert_eq!(BoardConfig::medium().pair_count(), 18);
        assert_eq!(BoardConfig::large().pair_count(), 32);
        assert_eq!(BoardConfig::default(), BoardConfig::medium());
        assert_eq!(BoardConfig::small().to_string(), "4x4");
    }

    #[test]
    fn test_validate() {
        assert!(BoardConfig::small().validate().is_ok());
        assert!(BoardConfig::new(2, 3).validate().is_ok());
        assert_eq!(
            BoardConfig::new(3, 3).validate(),
            Err(SetupError::OddTileCount { width: 3, height: 3 })
        );
        assert_eq!(
            BoardConfig::new(0, 4).validate(),
            Err(SetupError::EmptyDimension { width: 0, height: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_dimensions() {
        assert_eq!(
            BoardConfig::new(usize::MAX, 2).validate(),
            Err(SetupError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        assert_eq!(BoardConfig::new(usize::MAX, 2).tile_count(), usize::MAX);
    }

    #[test]
    fn test_default_pacing() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.mismatch_revert, Duration::from_millis(500));
        assert_eq!(pacing.game_over_hold, Duration::from_secs(5));
        assert_eq!(PacingConfig::instant().reveal_window, Duration::ZERO);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(BoardConfig::large())
            .with_seed(123)
            .with_pacing(PacingConfig::instant());

        assert_eq!(config.board, BoardConfig::large());
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.pacing, PacingConfig::instant());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(BoardConfig::small()).with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
