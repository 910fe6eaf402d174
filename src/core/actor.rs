//! The two seats at the table and per-seat storage.
//!
//! ## Actor
//!
//! A game is always human (`Player`) against the automated opponent
//! (`Computer`). The human moves first.
//!
//! ## ActorMap
//!
//! Fixed two-slot storage indexed by `Actor`, used for scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The human at the pointer.
    #[default]
    Player,
    /// The automated opponent.
    Computer,
}

impl Actor {
    /// Both actors, human first.
    pub const ALL: [Actor; 2] = [Actor::Player, Actor::Computer];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Actor::Player => Actor::Computer,
            Actor::Computer => Actor::Player,
        }
    }

    /// Slot index (0 for the human, 1 for the computer).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Actor::Player => 0,
            Actor::Computer => 1,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Player => write!(f, "player"),
            Actor::Computer => write!(f, "computer"),
        }
    }
}

/// Per-actor data with O(1) access.
///
/// ```
/// use memory_duel::core::{Actor, ActorMap};
///
/// let mut scores: ActorMap<u32> = ActorMap::default();
/// scores[Actor::Computer] += 2;
/// assert_eq!(scores[Actor::Player], 0);
/// assert_eq!(scores[Actor::Computer], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    data: [T; 2],
}

impl<T> ActorMap<T> {
    /// Create a map from one value per actor.
    pub fn new(player: T, computer: T) -> Self {
        Self {
            data: [player, computer],
        }
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        &self.data[actor.index()]
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        &mut self.data[actor.index()]
    }
}
