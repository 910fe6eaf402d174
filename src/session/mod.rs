//! Boundary between the game core and the presentation loop.
//!
//! The core never draws, never reads the pointer and never sleeps. The
//! presentation loop supplies those through three narrow traits:
//!
//! - [`InputResolver`]: pointer coordinate → tile position
//! - [`Pacing`]: blocking waits between reveal and resolution
//! - [`Presenter`]: called after every state change to redraw
//!
//! [`GameSession`] wires them to a `TurnEngine` and an opponent policy,
//! keeping reveals visible before they are resolved or flipped back.

mod driver;
mod layout;

pub use driver::GameSession;
pub use layout::TileLayout;

use std::time::Duration;

use crate::core::Position;
use crate::rules::TurnEngine;

/// Maps a raw pointer coordinate to the tile under it.
pub trait InputResolver {
    /// `None` if the point is not over any tile.
    fn resolve(&self, x: i32, y: i32) -> Option<Position>;
}

/// Blocking delay primitive.
///
/// Only ordering matters to the core, not timing accuracy.
pub trait Pacing {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacing;

impl Pacing for ThreadPacing {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Never waits. For headless play.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacing for NoPacing {
    fn pause(&mut self, _duration: Duration) {}
}

/// Redraws after each state change.
pub trait Presenter {
    fn present(&mut self, engine: &TurnEngine);
}

/// Draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPresenter;

impl Presenter for NoPresenter {
    fn present(&mut self, _engine: &TurnEngine) {}
}

/// Logs scores and phase at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn present(&mut self, engine: &TurnEngine) {
        let state = engine.state();
        log::trace!(
            "{:?} | turn {} | player {} computer {} | {}/{} pairs",
            engine.phase(),
            state.turn(),
            state.player_score(),
            state.computer_score(),
            state.matches_found(),
            state.pair_count()
        );
    }
}
