//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through a
//! `GameSession`, so every engine move goes through the same validation as a
//! human move.

use std::time::Instant;

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_session::GameSession;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_avg_ms={:.3} black_avg_ms={:.3}",
            self.outcome,
            self.played_moves.len(),
            avg_ms(self.white_total_time_ns, self.white_move_count),
            avg_ms(self.black_total_time_ns, self.black_move_count),
        )
    }
}

/// Play one game from the starting position. `engine_white` is White.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(engine_white, engine_black, GameState::new_game(), config)
}

/// Play one game from a caller-provided state, for curated positions.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    start_state: GameState,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();
    info!(
        white = engine_white.name(),
        black = engine_black.name(),
        max_plies = config.max_plies,
        "match started"
    );

    let mut session = GameSession::from_state(start_state);
    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if session.state().status.is_over() {
            break;
        }

        let mover = session.state().current_player;
        let board = session.state().board;
        let en_passant_target = session.state().en_passant_target;
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&board, mover, en_passant_target)?,
            Color::Black => engine_black.choose_move(&board, mover, en_passant_target)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        // Engines and status refresh see the same en-passant right, so a
        // side that is still playing always gets a move back.
        let chosen = out.best_move.ok_or(ChessError::GameOver(session.state().status))?;
        let played = session.play_move(chosen.from, chosen.to)?;
        debug!(
            color = %mover,
            notation = %played.notation,
            coordinates = %played.coordinates(),
            "ply"
        );
        played_moves.push(played.notation.clone());
    }

    let final_state = session.state().clone();
    let outcome = match final_state.status {
        GameStatus::Checkmate => match final_state.winner() {
            Some(Color::White) => MatchOutcome::WhiteWinCheckmate,
            _ => MatchOutcome::BlackWinCheckmate,
        },
        GameStatus::Stalemate => MatchOutcome::DrawStalemate,
        GameStatus::Draw | GameStatus::Playing => MatchOutcome::DrawMaxPlies,
    };
    info!(?outcome, plies = played_moves.len(), "match finished");

    Ok(MatchResult {
        outcome,
        final_state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
