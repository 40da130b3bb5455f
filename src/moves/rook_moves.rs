use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_shared::push_slides;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_slides(board, from, color, &ROOK_DIRECTIONS, out);
}
