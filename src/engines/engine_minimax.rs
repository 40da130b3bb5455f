//! Minimax engine driven by an `AiConfig`.
//!
//! Before searching, the engine rolls against the configured random-move
//! probability; on a hit it plays a uniformly random legal move. Otherwise it
//! runs the alpha-beta search at the configured depth.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::engines::engine_config::{AiConfig, Difficulty};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_generator::all_legal_moves_with_en_passant;
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::search;
use crate::search::threading::SharedSearchState;

pub struct MinimaxEngine {
    config: AiConfig,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::for_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    fn roll_random_move(&mut self) -> bool {
        let p = self.config.random_move_probability.clamp(0.0, 1.0);
        p > 0.0 && self.rng.random_bool(p)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        match self.config.difficulty {
            Difficulty::Easy => "Minimax (easy)",
            Difficulty::Medium => "Minimax (medium)",
            Difficulty::Hard => "Minimax (hard)",
        }
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        en_passant_target: Option<Square>,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();

        if self.roll_random_move() {
            let legal_moves = all_legal_moves_with_en_passant(board, color, en_passant_target);
            out.best_move = legal_moves.as_slice().choose(&mut self.rng).cloned();
            trace!(
                picked = out.best_move.as_ref().map(|m| m.notation.as_str()).unwrap_or("-"),
                "random root move"
            );
            out.info_lines
                .push(format!("minimax_engine random_move legal_moves {}", legal_moves.len()));
            return Ok(out);
        }

        let shared = SharedSearchState::new();
        let result = search(
            board,
            color,
            en_passant_target,
            self.config.search_config(),
            &StandardScorer,
            &shared,
        );

        if result.best_move.is_none() && !result.completed {
            return Err(ChessError::SearchCancelled);
        }

        out.info_lines.push(format!(
            "minimax_engine depth {} nodes {} score {} completed {}",
            self.config.depth, result.nodes, result.best_score, result.completed
        ));
        out.best_move = result.best_move;
        out.score = Some(result.best_score);
        out.nodes = result.nodes;
        Ok(out)
    }
}
