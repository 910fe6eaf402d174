//! The tile grid.
//!
//! `Board` holds each position's value plus two parallel flags:
//! `revealed` (face showing) and `matched` (resolved, out of play).
//! A matched tile is always revealed.

mod grid;

pub use grid::Board;
