//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always taken from the root color's perspective: plies where the
//! root color moves maximize, the others minimize. Root ties keep the first
//! move found in generation order (row-major scan, then destination order).

use tracing::{debug, instrument, trace};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_generator::all_legal_moves_with_en_passant;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::search::threading::SharedSearchState;

/// Upper bound on visited nodes unless the caller overrides it.
pub const DEFAULT_NODE_LIMIT: u64 = 5_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Disable to run exhaustive minimax over the same tree.
    pub pruning: bool,
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
            node_limit: Some(DEFAULT_NODE_LIMIT),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
    /// False when a stop request or the node ceiling cut the root short.
    pub completed: bool,
}

/// Best move for `color` searching `depth` plies, or `None` when `color` has
/// no legal move. Depth 0 is treated as 1. No en-passant right is assumed
/// at the root.
pub fn best_move(board: &Board, color: Color, depth: u8) -> Option<Move> {
    let shared = SharedSearchState::new();
    search(
        board,
        color,
        None,
        SearchConfig::with_depth(depth),
        &StandardScorer,
        &shared,
    )
    .best_move
}

/// Full search entry point with an explicit scorer and shared stop state.
///
/// `en_passant_target` is the right left by the previous half-move; deeper
/// plies carry the targets produced by their own transitions.
#[instrument(level = "debug", skip_all, fields(color = %color, depth = config.depth))]
pub fn search<S: BoardScorer>(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    config: SearchConfig,
    scorer: &S,
    shared: &SharedSearchState,
) -> SearchResult {
    shared.reset_nodes();
    shared.set_node_budget(config.node_limit);

    let moves = all_legal_moves_with_en_passant(board, color, en_passant_target);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(board, color),
            nodes: 1,
            completed: true,
        };
    }

    let depth = config.depth.max(1);
    let mut ctx = SearchContext {
        scorer,
        shared,
        root_color: color,
        pruning: config.pruning,
        nodes: 1,
        aborted: false,
    };

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        if ctx.should_stop() {
            break;
        }
        let Some(next) = apply_move_to_board(board, mv.from, mv.to, en_passant_target) else {
            continue;
        };

        let value = ctx.minimax(
            &next.board,
            next.en_passant_target,
            depth - 1,
            alpha,
            beta,
            false,
        );
        if ctx.aborted {
            break;
        }

        let improves = match &best {
            Some((_, best_value)) => value > *best_value,
            None => true,
        };
        if improves {
            trace!(notation = %mv.notation, value, "new best root move");
            best = Some((mv, value));
        }
        if ctx.pruning {
            alpha = alpha.max(value);
        }
    }

    let completed = !ctx.aborted && !shared.should_stop();
    let (best_move, best_score) = match best {
        Some((mv, value)) => (Some(mv), value),
        None => (None, scorer.score(board, color)),
    };

    debug!(
        nodes = ctx.nodes,
        best_score,
        completed,
        best = best_move.as_ref().map(|m| m.notation.as_str()).unwrap_or("-"),
        "search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes: ctx.nodes,
        completed,
    }
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    shared: &'a SharedSearchState,
    root_color: Color,
    pruning: bool,
    nodes: u64,
    aborted: bool,
}

impl<S: BoardScorer> SearchContext<'_, S> {
    #[inline]
    fn should_stop(&mut self) -> bool {
        if self.shared.should_stop() {
            self.aborted = true;
        }
        self.aborted
    }

    fn minimax(
        &mut self,
        board: &Board,
        en_passant_target: Option<Square>,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if self.shared.bump_nodes_and_check_budget(1) {
            self.shared.request_stop();
        }
        if self.should_stop() {
            return self.scorer.score(board, self.root_color);
        }

        if depth == 0 {
            return self.scorer.score(board, self.root_color);
        }

        let side = if maximizing {
            self.root_color
        } else {
            self.root_color.opposite()
        };
        let moves = all_legal_moves_with_en_passant(board, side, en_passant_target);
        if moves.is_empty() {
            return self.scorer.score(board, self.root_color);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let Some(next) = apply_move_to_board(board, mv.from, mv.to, en_passant_target) else {
                continue;
            };
            let value = self.minimax(
                &next.board,
                next.en_passant_target,
                depth - 1,
                alpha,
                beta,
                !maximizing,
            );
            if self.aborted {
                return best;
            }

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if self.pruning && beta <= alpha {
                break;
            }
        }
        best
    }
}
