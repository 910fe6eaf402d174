//! Headless matches: a blind-guessing stand-in for the human against the
//! recall opponent.

use clap::Parser;

use memory_duel::logging::init_logging;
use memory_duel::{
    Actor, BoardConfig, GameConfig, GameRng, GameSession, LogPresenter, NoPacing, PacingConfig,
    RandomPolicy, TileValue,
};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum GridSize {
    Small,
    Medium,
    Large,
}

impl From<GridSize> for BoardConfig {
    fn from(size: GridSize) -> Self {
        match size {
            GridSize::Small => BoardConfig::small(),
            GridSize::Medium => BoardConfig::medium(),
            GridSize::Large => BoardConfig::large(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "memory-duel", about = "Play headless memory games against the recall opponent")]
struct Cli {
    /// Grid size
    #[arg(long, value_enum, default_value = "medium")]
    size: GridSize,

    /// Base seed; game i uses seed + i. Random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(short = 'g', long, default_value_t = 100)]
    games: usize,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log)?;

    let board = BoardConfig::from(cli.size);
    let pool = TileValue::pool(board.pair_count());
    let mut wins = [0usize; 2];
    let mut ties = 0usize;

    for game in 0..cli.games {
        let mut config = GameConfig::new(board).with_pacing(PacingConfig::instant());
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed.wrapping_add(game as u64));
        }

        let mut session = GameSession::new(&config, &pool, NoPacing, LogPresenter)?;
        let mut human_rng = config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new)
            .for_context("human");

        let state = session.autoplay(&RandomPolicy, &mut human_rng);
        match state.winner() {
            Some(actor) => wins[actor.index()] += 1,
            None => ties += 1,
        }
        log::info!(
            "game {}: player {} - computer {}",
            game + 1,
            state.player_score(),
            state.computer_score()
        );
    }

    println!(
        "{} games on {}: player {} wins, computer {} wins, {} ties",
        cli.games,
        board,
        wins[Actor::Player.index()],
        wins[Actor::Computer.index()],
        ties
    );
    Ok(())
}
