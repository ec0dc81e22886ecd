//! Self-play series: a random White against the greedy Black opponent.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 5 --seed 7 --log-level debug --render`

use clap::Parser;
use log::{info, LevelFilter};

use rollback_chess::engines::engine_greedy::{GreedyEngine, OpponentConfig};
use rollback_chess::engines::engine_random::RandomEngine;
use rollback_chess::game_state::chess_types::Color;
use rollback_chess::utils::engine_match_harness::{play_match, MatchConfig, MatchOutcome};
use rollback_chess::utils::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "engine-match-series",
    about = "Play random White against the greedy Black opponent"
)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Base seed; game n uses seed + 2n for White and seed + 2n + 1 for Black
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Max plies before a game is abandoned
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print the final board of every game
    #[arg(long)]
    render: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level)?;

    let config = MatchConfig {
        max_plies: args.max_plies,
    };
    let mut black_wins = 0u32;

    for game_index in 0..args.games {
        let seed = args.seed.wrapping_add(2 * u64::from(game_index));
        let mut white = RandomEngine::new(Color::White, Some(seed));
        let mut black = GreedyEngine::new(OpponentConfig {
            color: Color::Black,
            seed: Some(seed.wrapping_add(1)),
        });

        let result = play_match(&mut white, &mut black, &config)?;
        info!(
            "game {} (seed {}): {:?} after {} plies",
            game_index + 1,
            seed,
            result.outcome,
            result.plies()
        );
        if result.outcome == (MatchOutcome::Checkmate { winner: Color::Black }) {
            black_wins += 1;
        }
        if args.render {
            println!("{}\n", result.final_board);
        }
    }

    println!("greedy Black won {black_wins} of {} game(s)", args.games);
    Ok(())
}
