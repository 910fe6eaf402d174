//! Resolved turns, kept for presentation and replay checks.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, Position, TileValue};

/// Result of comparing two revealed tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both tiles showed this value; the pair left play.
    Match(TileValue),
    /// Values differed; both tiles flipped back.
    Mismatch(TileValue, TileValue),
}

impl Outcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Match(_))
    }
}

/// One resolved pair attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who revealed the pair.
    pub actor: Actor,
    pub first: Position,
    pub second: Position,
    pub outcome: Outcome,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::Match(value) => write!(
                f,
                "{} matched {} at {} and {}",
                self.actor, value, self.first, self.second
            ),
            Outcome::Mismatch(a, b) => write!(
                f,
                "{} missed: {} at {}, {} at {}",
                self.actor, a, self.first, b, self.second
            ),
        }
    }
}
