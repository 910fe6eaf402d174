//! Scores, turn and progress.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, ActorMap, Position};

/// Where the turn engine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the acting seat to pick its first tile.
    AwaitingFirstSelection,
    /// One tile is up; waiting for the second.
    AwaitingSecondSelection { first: Position },
    /// Two tiles are up and will be compared on the next `resolve`.
    Resolving { first: Position, second: Position },
    /// Every pair is matched. Terminal.
    GameOver,
}

/// Observable game progress.
///
/// Scores only grow. Only the turn engine mutates this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    turn: Actor,
    scores: ActorMap<u32>,
    matches_found: usize,
    pair_count: usize,
}

impl GameState {
    /// Fresh state for a board with `pair_count` pairs. The human starts.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            turn: Actor::Player,
            scores: ActorMap::default(),
            matches_found: 0,
            pair_count,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Actor {
        self.turn
    }

    #[must_use]
    pub fn score(&self, actor: Actor) -> u32 {
        self.scores[actor]
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.scores[Actor::Player]
    }

    #[must_use]
    pub fn computer_score(&self) -> u32 {
        self.scores[Actor::Computer]
    }

    /// Pairs resolved so far.
    #[must_use]
    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    /// Pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// True once every pair is matched.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.matches_found >= self.pair_count
    }

    /// Higher score, or `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Actor> {
        let player = self.player_score();
        let computer = self.computer_score();
        match player.cmp(&computer) {
            std::cmp::Ordering::Greater => Some(Actor::Player),
            std::cmp::Ordering::Less => Some(Actor::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub(crate) fn award_match(&mut self, actor: Actor) {
        self.scores[actor] += 1;
        self.matches_found += 1;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.turn = self.turn.other();
    }
}
