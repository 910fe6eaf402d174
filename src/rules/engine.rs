//! The turn state machine.
//!
//! ## Flow
//!
//! 1. The acting seat selects a face-down tile; it is revealed and the
//!    opponent records it, whoever flipped it.
//! 2. A second selection moves to `Resolving`. Nothing is compared yet so the
//!    presentation layer can show both tiles for as long as it likes.
//! 3. `resolve` compares them. A match scores, removes the pair and keeps the
//!    turn. A mismatch flips both back and passes the turn; if the computer
//!    missed, it forgets those two sightings.
//! 4. Once every pair is matched the engine is in `GameOver` for good.
//!
//! Selections that make no sense right now (wrong seat, tile already up or
//! matched, off the grid, mid-resolution, game over) are ignored.

use crate::board::Board;
use crate::core::{Actor, BoardConfig, GameRng, Position, TileValue};
use crate::error::Result;
use crate::index::OrderedValueIndex;
use crate::memory::OpponentMemory;

use super::record::{Outcome, TurnRecord};
use super::state::{GameState, Phase};

/// What a call to [`TurnEngine::select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Not a legal selection right now; nothing changed.
    Ignored,
    /// First tile of the turn is up.
    First(Position),
    /// Second tile is up; call `resolve` next.
    Pair(Position, Position),
}

/// Owns one game: board, scores, opponent memory and value index.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    board: Board,
    state: GameState,
    phase: Phase,
    memory: OpponentMemory,
    index: OrderedValueIndex,
    history: Vec<TurnRecord>,
}

impl TurnEngine {
    /// Deal a board from `pool` and start a game.
    ///
    /// The deal and the index tower heights draw from separate streams of `rng`.
    pub fn new(pool: &[TileValue], board: BoardConfig, rng: &GameRng) -> Result<Self> {
        let board = Board::generate(pool, board, &mut rng.for_context("deal"))?;
        log::info!("new {} game, seed {}", board.config(), rng.seed());
        Ok(Self::with_board(board, rng))
    }

    /// Start a game on an already built board.
    #[must_use]
    pub fn with_board(board: Board, rng: &GameRng) -> Self {
        let mut index = OrderedValueIndex::with_rng(rng.for_context("index"));
        index.extend(board.values());

        Self {
            state: GameState::new(board.pair_count()),
            phase: Phase::AwaitingFirstSelection,
            memory: OpponentMemory::new(),
            index,
            history: Vec::new(),
            board,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Actor {
        self.state.turn()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// What the opponent currently remembers.
    #[must_use]
    pub fn memory(&self) -> &OpponentMemory {
        &self.memory
    }

    /// Values still in play.
    #[must_use]
    pub fn index(&self) -> &OrderedValueIndex {
        &self.index
    }

    /// Every resolved pair attempt, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    // === Transitions ===

    /// Reveal `pos` on behalf of `actor`.
    pub fn select(&mut self, actor: Actor, pos: Position) -> Selection {
        if actor != self.state.turn() {
            return Selection::Ignored;
        }

        let first = match self.phase {
            Phase::AwaitingFirstSelection => None,
            Phase::AwaitingSecondSelection { first } => Some(first),
            Phase::Resolving { .. } | Phase::GameOver => return Selection::Ignored,
        };

        let Some(value) = self.board.reveal(pos) else {
            return Selection::Ignored;
        };
        log::debug!("{} reveals {} at {}", actor, value, pos);
        self.memory.record(value, pos);

        match first {
            None => {
                self.phase = Phase::AwaitingSecondSelection { first: pos };
                Selection::First(pos)
            }
            Some(first) => {
                self.phase = Phase::Resolving { first, second: pos };
                Selection::Pair(first, pos)
            }
        }
    }

    /// Compare the two revealed tiles and settle the turn.
    ///
    /// Returns `None` unless the engine is in `Resolving`.
    pub fn resolve(&mut self) -> Option<TurnRecord> {
        let Phase::Resolving { first, second } = self.phase else {
            return None;
        };
        let actor = self.state.turn();
        let a = self.board.value_at(first)?;
        let b = self.board.value_at(second)?;

        let outcome = if a == b {
            self.board.mark_matched(first);
            self.board.mark_matched(second);
            self.index.remove(&a);
            self.memory.forget(a, &[first, second]);
            self.state.award_match(actor);
            Outcome::Match(a)
        } else {
            if actor == Actor::Computer {
                self.memory.forget(a, &[first]);
                self.memory.forget(b, &[second]);
            }
            self.board.conceal(first);
            self.board.conceal(second);
            self.state.pass_turn();
            Outcome::Mismatch(a, b)
        };

        let record = TurnRecord {
            actor,
            first,
            second,
            outcome,
        };
        log::info!("{}", record);
        self.history.push(record);

        self.phase = if self.state.is_over() {
            log::info!(
                "game over: player {} - computer {}",
                self.state.player_score(),
                self.state.computer_score()
            );
            Phase::GameOver
        } else {
            Phase::AwaitingFirstSelection
        };

        Some(record)
    }
}
