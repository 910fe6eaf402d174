//! # memory-duel
//!
//! Game core for a two-seat tile-matching memory game: a human flips pairs
//! of face-down tiles against an automated opponent that remembers what it
//! has seen.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `TurnEngine` owns the board, scores, the opponent's
//!    memory and the in-play value index. Nothing else mutates them.
//!
//! 2. **Total after setup**: only building a game can fail. Selections that
//!    make no sense are ignored rather than reported.
//!
//! 3. **No clocks in the core**: reveal and resolution are separate steps so
//!    the presentation loop decides how long tiles stay visible.
//!
//! ## Modules
//!
//! - `core`: Positions, tile values, actors, RNG, configuration
//! - `index`: Skip-list ordered set of values still in play
//! - `memory`: The opponent's recall of seen tiles
//! - `board`: Tile grid with revealed/matched state
//! - `rules`: Turn state machine and scoring
//! - `opponent`: Pair-choosing policies
//! - `session`: Pacing, input and presentation boundary

pub mod board;
pub mod core;
pub mod error;
pub mod index;
pub mod logging;
pub mod memory;
pub mod opponent;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorMap, BoardConfig, GameConfig, GameRng, PacingConfig, Position, TileValue,
};

pub use crate::error::{Result, SetupError};

pub use crate::board::Board;

pub use crate::index::{OrderedValueIndex, SkipSet};

pub use crate::memory::OpponentMemory;

pub use crate::rules::{GameState, Outcome, Phase, Selection, TurnEngine, TurnRecord};

pub use crate::opponent::{OpponentPolicy, RandomPolicy, RecallPolicy};

pub use crate::session::{
    GameSession, InputResolver, LogPresenter, NoPacing, NoPresenter, Pacing, Presenter,
    ThreadPacing, TileLayout,
};
