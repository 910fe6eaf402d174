//! Pair-choosing policies.

use crate::core::{GameRng, Position};
use crate::rules::TurnEngine;

/// Chooses the two tiles to reveal on a turn.
pub trait OpponentPolicy: Send + Sync {
    /// Pick two distinct selectable positions.
    ///
    /// Returns `None` if fewer than two tiles are face down.
    fn choose_pair(&self, engine: &TurnEngine, rng: &mut GameRng) -> Option<(Position, Position)>;
}

/// Prefer a remembered pair, else guess uniformly among face-down tiles.
#[derive(Clone, Debug, Default)]
pub struct RecallPolicy;

impl OpponentPolicy for RecallPolicy {
    fn choose_pair(&self, engine: &TurnEngine, rng: &mut GameRng) -> Option<(Position, Position)> {
        let board = engine.board();
        if let Some((a, b)) = engine.memory().find_known_pair(engine.index()) {
            if a != b && board.is_selectable(a) && board.is_selectable(b) {
                log::debug!("opponent goes for remembered pair {} {}", a, b);
                return Some((a, b));
            }
        }
        RandomPolicy.choose_pair(engine, rng)
    }
}

/// Uniform blind guess among face-down tiles.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl OpponentPolicy for RandomPolicy {
    fn choose_pair(&self, engine: &TurnEngine, rng: &mut GameRng) -> Option<(Position, Position)> {
        let hidden = engine.board().hidden_positions();
        let pair = rng.sample_pair(&hidden);
        if let Some((a, b)) = pair {
            log::debug!("blind guess {} {}", a, b);
        }
        pair
    }
}
