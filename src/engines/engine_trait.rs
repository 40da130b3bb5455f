//! Engine abstraction used by the game session and the match harness.
//!
//! Different move-selection strategies sit behind one trait so the turn
//! driver can swap them at runtime.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when `color` has no legal move.
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `color`. `en_passant_target` is the right created by
    /// the previous half-move, if any.
    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        en_passant_target: Option<Square>,
    ) -> ChessResult<EngineOutput>;
}
