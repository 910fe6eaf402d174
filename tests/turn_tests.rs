//! Turn engine integration tests on fixed and dealt boards.

use proptest::prelude::*;

use memory_duel::board::Board;
use memory_duel::core::{Actor, BoardConfig, GameRng, Position, TileValue};
use memory_duel::rules::{Outcome, Phase, Selection, TurnEngine};

/// 4x4 board holding A..H (0..8): value v at (v / 4, v % 4) and (2 + v / 4, v % 4).
fn fixed_engine() -> TurnEngine {
    let tiles = (0..16).map(|i| TileValue::new(i % 8)).collect();
    let board = Board::from_layout(BoardConfig::small(), tiles).unwrap();
    TurnEngine::with_board(board, &GameRng::new(42))
}

fn pair(v: usize) -> (Position, Position) {
    (Position::new(v / 4, v % 4), Position::new(2 + v / 4, v % 4))
}

fn take_turn(engine: &mut TurnEngine, a: Position, b: Position) -> Outcome {
    let actor = engine.turn();
    assert_eq!(engine.select(actor, a), Selection::First(a));
    assert_eq!(engine.select(actor, b), Selection::Pair(a, b));
    engine.resolve().unwrap().outcome
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_matching_a_scores_for_current_actor() {
    let mut engine = fixed_engine();
    let (a1, a2) = pair(0);

    let outcome = take_turn(&mut engine, a1, a2);

    assert_eq!(outcome, Outcome::Match(TileValue::new(0)));
    assert_eq!(engine.state().player_score(), 1);
    assert_eq!(engine.state().computer_score(), 0);
    assert!(!engine.index().contains(&TileValue::new(0)));
    assert_eq!(engine.state().matches_found(), 1);
}

#[test]
fn test_a_then_b_flips_turn_and_hides_both() {
    let mut engine = fixed_engine();
    let (a, _) = pair(0);
    let (b, _) = pair(1);

    let outcome = take_turn(&mut engine, a, b);

    assert!(!outcome.is_match());
    assert_eq!(engine.state().player_score(), 0);
    assert_eq!(engine.state().computer_score(), 0);
    assert_eq!(engine.turn(), Actor::Computer);
    assert!(!engine.board().is_revealed(a));
    assert!(!engine.board().is_revealed(b));
}

#[test]
fn test_computer_match_is_symmetric() {
    let mut engine = fixed_engine();
    let (a, _) = pair(0);
    let (b, _) = pair(1);
    take_turn(&mut engine, a, b);

    let (c1, c2) = pair(2);
    let outcome = take_turn(&mut engine, c1, c2);

    assert!(outcome.is_match());
    assert_eq!(engine.state().computer_score(), 1);
    assert_eq!(engine.turn(), Actor::Computer);
    assert!(engine.board().is_matched(c1) && engine.board().is_matched(c2));
    assert!(!engine.index().contains(&TileValue::new(2)));
}

#[test]
fn test_game_over_after_k_matches() {
    let mut engine = fixed_engine();

    // Alternate: each seat misses once, then the human clears the board
    take_turn(&mut engine, pair(0).0, pair(1).0);
    take_turn(&mut engine, pair(2).0, pair(3).0);
    for v in 0..8 {
        let (a, b) = pair(v);
        assert!(take_turn(&mut engine, a, b).is_match());
    }

    assert_eq!(engine.state().matches_found(), 8);
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(engine.state().player_score(), 8);
    assert_eq!(engine.history().len(), 10);

    for pos in engine.board().positions().collect::<Vec<_>>() {
        assert_eq!(engine.select(Actor::Player, pos), Selection::Ignored);
        assert_eq!(engine.select(Actor::Computer, pos), Selection::Ignored);
    }
    assert_eq!(engine.resolve(), None);
}

#[test]
fn test_dealt_board_plays_out() {
    let rng = GameRng::new(2024);
    let mut engine = TurnEngine::new(&TileValue::pool(18), BoardConfig::medium(), &rng).unwrap();

    // Perfect information: match every value in turn
    for value in engine.board().values() {
        let positions = engine.board().positions_of(value);
        assert_eq!(positions.len(), 2);
        assert!(take_turn(&mut engine, positions[0], positions[1]).is_match());
    }

    assert!(engine.is_over());
    assert_eq!(engine.state().player_score(), 18);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_turn_and_index_invariants(
        selections in prop::collection::vec((0usize..4, 0usize..4, any::<bool>()), 0..200)
    ) {
        let mut engine = fixed_engine();
        let mut last_scores = (0, 0);

        for (row, col, as_computer) in selections {
            let actor = if as_computer { Actor::Computer } else { Actor::Player };
            let turn_before = engine.turn();

            if let Selection::Pair(..) = engine.select(actor, Position::new(row, col)) {
                let record = engine.resolve().unwrap();
                prop_assert_eq!(record.actor, turn_before);
                if record.outcome.is_match() {
                    prop_assert_eq!(engine.turn(), turn_before);
                } else {
                    prop_assert_eq!(engine.turn(), turn_before.other());
                }
            }

            let state = engine.state();
            prop_assert!(state.player_score() >= last_scores.0);
            prop_assert!(state.computer_score() >= last_scores.1);
            last_scores = (state.player_score(), state.computer_score());
            prop_assert_eq!(
                (state.player_score() + state.computer_score()) as usize,
                state.matches_found()
            );

            let board = engine.board();
            for pos in board.positions() {
                if board.is_matched(pos) {
                    prop_assert!(board.is_revealed(pos));
                }
            }
            for value in board.values() {
                let in_play = board.positions_of(value).iter().any(|&p| !board.is_matched(p));
                prop_assert_eq!(engine.index().contains(&value), in_play);
            }
        }
    }

    #[test]
    fn prop_generated_boards_pair_every_value(seed in any::<u64>(), size in 0usize..3) {
        let config = [BoardConfig::small(), BoardConfig::medium(), BoardConfig::large()][size];
        let pool = TileValue::pool(config.pair_count());
        let board = Board::generate(&pool, config, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(board.width(), config.width);
        prop_assert_eq!(board.height(), config.height);
        prop_assert_eq!(board.tile_count() % 2, 0);
        for value in pool {
            prop_assert_eq!(board.positions_of(value).len(), 2);
        }
    }
}
