//! Perft node counting over the legal move generator.
//!
//! Counts leaf positions reached after exactly `depth` half-moves, with
//! per-category tallies of the last move, for validating move generation
//! against published start-position figures.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::game_status::checkmate;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_generator::all_legal_moves_with_en_passant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, color: Color, depth: u8) -> PerftCounts {
    perft_with_en_passant(board, color, None, depth)
}

pub fn perft_with_en_passant(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves_with_en_passant(board, color, en_passant_target) {
        let Some(transition) = apply_move_to_board(board, mv.from, mv.to, en_passant_target)
        else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(mv.is_capture());
            total.en_passant += u64::from(mv.is_en_passant);
            total.castles += u64::from(mv.is_castling);
            total.checkmates += u64::from(checkmate(&transition.board, color.opposite()));
            continue;
        }

        total.merge(perft_with_en_passant(
            &transition.board,
            color.opposite(),
            transition.en_passant_target,
            depth - 1,
        ));
    }
    total
}
