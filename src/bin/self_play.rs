//! Engine-vs-engine self-play from the starting position.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white hard --black easy --plies 120`
//!
//! `--seed N` makes the easy level's random moves reproducible. Without
//! `--white`/`--black`, both sides use `CASUAL_CHESS_DIFFICULTY` (default
//! medium). Log verbosity follows `RUST_LOG`.

use casual_chess::engines::engine_config::{AiConfig, Difficulty};
use casual_chess::engines::engine_minimax::MinimaxEngine;
use casual_chess::errors::{ChessError, ChessResult};
use casual_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use casual_chess::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

const DIFFICULTY_ENV: &str = "CASUAL_CHESS_DIFFICULTY";

struct Args {
    white: Difficulty,
    black: Difficulty,
    max_plies: u16,
    seed: Option<u64>,
}

fn parse_args() -> ChessResult<Args> {
    let default_difficulty = match std::env::var(DIFFICULTY_ENV) {
        Ok(value) => value.parse()?,
        Err(_) => Difficulty::default(),
    };
    let mut args = Args {
        white: default_difficulty,
        black: default_difficulty,
        max_plies: MatchConfig::default().max_plies,
        seed: None,
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let value = it
            .next()
            .ok_or_else(|| ChessError::InvalidArgument(format!("missing value for {flag}")))?;
        match flag.as_str() {
            "--white" => args.white = value.parse()?,
            "--black" => args.black = value.parse()?,
            "--plies" => {
                args.max_plies = value
                    .parse()
                    .map_err(|_| ChessError::InvalidArgument(format!("bad ply count {value}")))?
            }
            "--seed" => {
                args.seed = Some(
                    value
                        .parse()
                        .map_err(|_| ChessError::InvalidArgument(format!("bad seed {value}")))?,
                )
            }
            other => {
                return Err(ChessError::InvalidArgument(format!(
                    "unknown argument {other}"
                )))
            }
        }
    }
    Ok(args)
}

fn engine_for(difficulty: Difficulty, seed: Option<u64>) -> MinimaxEngine {
    let config = AiConfig::for_difficulty(difficulty);
    MinimaxEngine::new(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    println!("white={} black={} max_plies={}", args.white, args.black, args.max_plies);

    let result = play_engine_match(
        Box::new(engine_for(args.white, args.seed)),
        Box::new(engine_for(args.black, args.seed.map(|s| s.wrapping_add(1)))),
        MatchConfig {
            max_plies: args.max_plies,
        },
    )?;

    for (i, pair) in result.played_moves.chunks(2).enumerate() {
        println!("{:>3}. {}", i + 1, pair.join(" "));
    }
    println!();
    println!("{}", render_game_state(&result.final_state));
    println!("{}", result.report());
    Ok(())
}
