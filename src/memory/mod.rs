//! What the automated opponent remembers about the board.

mod recall;

pub use recall::{OpponentMemory, RecallSet};
