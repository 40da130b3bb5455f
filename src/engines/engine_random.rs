//! Random-move engine.
//!
//! Selects uniformly from legal moves; used for diagnostics, self-play
//! openings and as a weakest opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_generator::all_legal_moves_with_en_passant;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        en_passant_target: Option<Square>,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = all_legal_moves_with_en_passant(board, color, en_passant_target);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).cloned();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::{initial_board, Board};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn random_engine_picks_a_legal_move() {
        let board = initial_board();
        let mut engine = RandomEngine::seeded(7);
        let out = engine
            .choose_move(&board, Color::White, None)
            .expect("random engine should not fail");
        let picked = out.best_move.expect("start position has moves");
        assert!(all_legal_moves(&board, Color::White).contains(&picked));
    }

    #[test]
    fn same_seed_same_choice() {
        let board = initial_board();
        let a = RandomEngine::seeded(42)
            .choose_move(&board, Color::Black, None)
            .expect("choose should succeed");
        let b = RandomEngine::seeded(42)
            .choose_move(&board, Color::Black, None)
            .expect("choose should succeed");
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn en_passant_is_in_the_candidate_set() {
        // White's king is boxed in and the e5 pawn can only take en passant.
        let mut board = Board::empty();
        board.place(Square { row: 0, col: 6 }, Piece::new(PieceKind::Rook, Color::Black));
        board.place(Square { row: 7, col: 7 }, Piece::new(PieceKind::King, Color::White));
        board.place(Square { row: 3, col: 4 }, Piece::new(PieceKind::Pawn, Color::White).moved());
        board.place(Square { row: 2, col: 4 }, Piece::new(PieceKind::Pawn, Color::Black).moved());
        board.place(Square { row: 3, col: 3 }, Piece::new(PieceKind::Pawn, Color::Black).moved());
        board.place(Square { row: 0, col: 0 }, Piece::new(PieceKind::King, Color::Black));
        board.place(Square { row: 6, col: 0 }, Piece::new(PieceKind::Rook, Color::Black));

        let out = RandomEngine::seeded(3)
            .choose_move(&board, Color::White, Some(Square { row: 2, col: 3 }))
            .expect("random engine should not fail");
        let mv = out.best_move.expect("en passant is available");
        assert!(mv.is_en_passant);

        let none = RandomEngine::seeded(3)
            .choose_move(&board, Color::White, None)
            .expect("random engine should not fail");
        assert!(none.best_move.is_none());
    }
}
