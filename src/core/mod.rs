//! Core types: positions, tile values, actors, RNG, configuration.
//!
//! These are the plain value types every other module builds on.

pub mod actor;
pub mod config;
pub mod position;
pub mod rng;
pub mod tile;

pub use actor::{Actor, ActorMap};
pub use config::{BoardConfig, GameConfig, PacingConfig};
pub use position::Position;
pub use rng::GameRng;
pub use tile::TileValue;
