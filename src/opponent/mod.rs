//! Move selection for the automated seat.
//!
//! Policies are trait-based so the session can seat any chooser:
//! - `RecallPolicy`: reveal a remembered pair if one is still in play,
//!   otherwise guess blind (the automated opponent)
//! - `RandomPolicy`: always guess blind (stands in for a human in
//!   headless play)
//!
//! Policies only read the engine. All mutation goes through `TurnEngine`.

mod policy;

pub use policy::{OpponentPolicy, RandomPolicy, RecallPolicy};
