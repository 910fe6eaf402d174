//! Session driver: pacing order, presentation hooks, pointer input.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use memory_duel::board::Board;
use memory_duel::core::{Actor, BoardConfig, GameConfig, GameRng, PacingConfig, Position, TileValue};
use memory_duel::rules::{Phase, Selection, TurnEngine};
use memory_duel::session::{GameSession, Pacing, Presenter, TileLayout};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    /// Presenter saw this many face-up unmatched tiles.
    Shown(usize),
    Paused(Duration),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct RecordingPacing(Log);

impl Pacing for RecordingPacing {
    fn pause(&mut self, duration: Duration) {
        self.0.borrow_mut().push(Event::Paused(duration));
    }
}

struct RecordingPresenter(Log);

impl Presenter for RecordingPresenter {
    fn present(&mut self, engine: &TurnEngine) {
        let board = engine.board();
        let up = board
            .positions()
            .filter(|&p| board.is_revealed(p) && !board.is_matched(p))
            .count();
        self.0.borrow_mut().push(Event::Shown(up));
    }
}

fn session(log: &Log) -> GameSession<RecordingPacing, RecordingPresenter> {
    let tiles = (0..16).map(|i| TileValue::new(i % 8)).collect();
    let board = Board::from_layout(BoardConfig::small(), tiles).unwrap();
    let rng = GameRng::new(42);
    let engine = TurnEngine::with_board(board, &rng);
    GameSession::from_engine(
        engine,
        &rng,
        PacingConfig::default(),
        RecordingPacing(log.clone()),
        RecordingPresenter(log.clone()),
    )
}

#[test]
fn test_human_mismatch_shows_then_waits_then_reverts() {
    let log: Log = Rc::default();
    let mut session = session(&log);

    session.select_for_player(Position::new(0, 0));
    session.select_for_player(Position::new(0, 1));

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Shown(0),
            Event::Shown(1),
            Event::Shown(2),
            Event::Paused(Duration::from_millis(500)),
            Event::Shown(0),
        ]
    );
    assert_eq!(session.engine().turn(), Actor::Computer);
}

#[test]
fn test_human_match_does_not_wait() {
    let log: Log = Rc::default();
    let mut session = session(&log);

    session.select_for_player(Position::new(0, 0));
    session.select_for_player(Position::new(2, 0));

    assert!(!log.borrow().iter().any(|e| matches!(e, Event::Paused(_))));
    assert_eq!(session.state().player_score(), 1);
}

#[test]
fn test_computer_turn_thinks_reveals_waits_resolves() {
    let log: Log = Rc::default();
    let mut session = session(&log);

    session.select_for_player(Position::new(0, 0));
    session.select_for_player(Position::new(0, 1));
    log.borrow_mut().clear();

    let records = session.play_computer_turn();
    let events = log.borrow();

    assert_eq!(events[0], Event::Paused(Duration::from_millis(1000)));
    assert_eq!(events[1], Event::Shown(2));
    assert_eq!(events[2], Event::Paused(Duration::from_millis(1000)));
    assert_eq!(events[3], Event::Shown(0));
    // think, show, wait, resolve per attempt
    let presents = events.iter().filter(|e| matches!(e, Event::Shown(_))).count();
    assert_eq!(presents, records.len() * 2);
}

#[test]
fn test_game_over_hold() {
    let log: Log = Rc::default();
    let mut session = session(&log);

    for v in 0..8 {
        session.select_for_player(Position::new(v / 4, v % 4));
        session.select_for_player(Position::new(2 + v / 4, v % 4));
    }

    assert_eq!(session.engine().phase(), Phase::GameOver);
    assert_eq!(log.borrow().last(), Some(&Event::Paused(Duration::from_secs(5))));
}

#[test]
fn test_click_goes_through_layout() {
    let log: Log = Rc::default();
    let mut session = session(&log);
    let layout = TileLayout::for_board(BoardConfig::small());

    assert_eq!(session.click(&layout, 5, 5), Selection::Ignored);
    assert_eq!(session.click(&layout, 50, 50), Selection::First(Position::new(0, 0)));
    assert_eq!(
        session.click(&layout, 50, 2 * 130 + 50),
        Selection::Pair(Position::new(0, 0), Position::new(2, 0))
    );
    assert_eq!(session.state().player_score(), 1);
}

#[test]
fn test_setup_errors_surface_before_play() {
    let config = GameConfig::new(BoardConfig::small()).with_seed(1);
    let result = GameSession::new(
        &config,
        &TileValue::pool(5),
        memory_duel::session::NoPacing,
        memory_duel::session::NoPresenter,
    );
    assert!(result.is_err());
}
