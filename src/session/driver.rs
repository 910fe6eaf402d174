//! Session driver: sequences selections, pauses and redraws.

use crate::core::{Actor, GameConfig, GameRng, PacingConfig, Position, TileValue};
use crate::error::Result;
use crate::opponent::{OpponentPolicy, RecallPolicy};
use crate::rules::{GameState, Phase, Selection, TurnEngine, TurnRecord};

use super::{InputResolver, Pacing, Presenter};

/// One human-vs-computer game plus its presentation hooks.
///
/// ## Usage
///
/// ```
/// use memory_duel::core::{BoardConfig, GameConfig, PacingConfig, TileValue};
/// use memory_duel::session::{GameSession, NoPacing, NoPresenter};
/// use memory_duel::opponent::RandomPolicy;
/// use memory_duel::core::GameRng;
///
/// let config = GameConfig::new(BoardConfig::small())
///     .with_seed(7)
///     .with_pacing(PacingConfig::instant());
/// let pool = TileValue::pool(8);
/// let mut session = GameSession::new(&config, &pool, NoPacing, NoPresenter).unwrap();
///
/// let state = session.autoplay(&RandomPolicy, &mut GameRng::new(1));
/// assert!(state.is_over());
/// assert_eq!(state.player_score() + state.computer_score(), 8);
/// ```
pub struct GameSession<P, R> {
    engine: TurnEngine,
    opponent: Box<dyn OpponentPolicy>,
    rng: GameRng,
    timing: PacingConfig,
    pacing: P,
    presenter: R,
}

impl<P: Pacing, R: Presenter> GameSession<P, R> {
    /// Deal a new game against the recall opponent.
    pub fn new(config: &GameConfig, pool: &[TileValue], pacing: P, presenter: R) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let engine = TurnEngine::new(pool, config.board, &rng)?;
        Ok(Self::from_engine(engine, &rng, config.pacing.clone(), pacing, presenter))
    }

    /// Wrap an existing engine. The opponent guesses from `rng`'s "opponent" stream.
    pub fn from_engine(
        engine: TurnEngine,
        rng: &GameRng,
        timing: PacingConfig,
        pacing: P,
        mut presenter: R,
    ) -> Self {
        presenter.present(&engine);
        Self {
            engine,
            opponent: Box::new(RecallPolicy),
            rng: rng.for_context("opponent"),
            timing,
            pacing,
            presenter,
        }
    }

    /// Seat a different opponent policy.
    #[must_use]
    pub fn with_opponent(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.opponent = Box::new(policy);
        self
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub fn presenter(&self) -> &R {
        &self.presenter
    }

    #[must_use]
    pub fn pacing(&self) -> &P {
        &self.pacing
    }

    /// Human pointer press at `(x, y)`.
    pub fn click(&mut self, resolver: &impl InputResolver, x: i32, y: i32) -> Selection {
        match resolver.resolve(x, y) {
            Some(pos) => self.select_for_player(pos),
            None => Selection::Ignored,
        }
    }

    /// Human selects `pos`.
    ///
    /// On the second tile of a failed pair both stay visible for
    /// `mismatch_revert` before flipping back.
    pub fn select_for_player(&mut self, pos: Position) -> Selection {
        let selection = self.engine.select(Actor::Player, pos);
        match selection {
            Selection::Ignored => {}
            Selection::First(_) => self.presenter.present(&self.engine),
            Selection::Pair(a, b) => {
                self.presenter.present(&self.engine);
                let board = self.engine.board();
                if board.value_at(a) != board.value_at(b) {
                    self.pacing.pause(self.timing.mismatch_revert);
                }
                self.settle();
            }
        }
        selection
    }

    /// Let the computer act until the turn passes back or the game ends.
    ///
    /// Returns the pair attempts it made.
    pub fn play_computer_turn(&mut self) -> Vec<TurnRecord> {
        let mut records = Vec::new();

        while self.engine.turn() == Actor::Computer && !self.engine.is_over() {
            self.pacing.pause(self.timing.computer_think);

            let Some((a, b)) = self.opponent.choose_pair(&self.engine, &mut self.rng) else {
                log::warn!("opponent has no move on a live board");
                break;
            };
            if !self.is_playable(a, b) {
                log::warn!("opponent chose unplayable pair {} {}", a, b);
                break;
            }
            self.engine.select(Actor::Computer, a);
            self.engine.select(Actor::Computer, b);
            self.presenter.present(&self.engine);
            self.pacing.pause(self.timing.reveal_window);

            match self.settle() {
                Some(record) => records.push(record),
                None => break,
            }
        }

        records
    }

    /// Play the whole game with `human` choosing for the player seat.
    pub fn autoplay(&mut self, human: &dyn OpponentPolicy, rng: &mut GameRng) -> &GameState {
        while !self.engine.is_over() {
            match self.engine.turn() {
                Actor::Player => {
                    let Some((a, b)) = human.choose_pair(&self.engine, rng) else {
                        break;
                    };
                    if !self.is_playable(a, b) {
                        log::warn!("player policy chose unplayable pair {} {}", a, b);
                        break;
                    }
                    self.select_for_player(a);
                    self.select_for_player(b);
                }
                Actor::Computer => {
                    if self.play_computer_turn().is_empty() {
                        break;
                    }
                }
            }
        }
        self.engine.state()
    }

    /// Two distinct face-down tiles at the start of a turn.
    fn is_playable(&self, a: Position, b: Position) -> bool {
        let board = self.engine.board();
        self.engine.phase() == Phase::AwaitingFirstSelection
            && a != b
            && board.is_selectable(a)
            && board.is_selectable(b)
    }

    fn settle(&mut self) -> Option<TurnRecord> {
        let record = self.engine.resolve()?;
        self.presenter.present(&self.engine);
        if self.engine.is_over() {
            self.pacing.pause(self.timing.game_over_hold);
        }
        Some(record)
    }
}
