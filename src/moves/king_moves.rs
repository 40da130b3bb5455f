use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_shared::push_steps;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares only. Castling destinations are added by the legal
/// move generator, never here, so attack detection stays one step deep.
pub fn king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_steps(board, from, color, &KING_OFFSETS, out);
}
