//! Turn progression and pair resolution.
//!
//! `TurnEngine` is the only place game state changes. It owns the board,
//! scores, the opponent's memory and the in-play value index, and routes
//! every mutation through [`TurnEngine::select`] and [`TurnEngine::resolve`].

mod engine;
mod record;
mod state;

pub use engine::{Selection, TurnEngine};
pub use record::{Outcome, TurnRecord};
pub use state::{GameState, Phase};
