use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_shared::push_slides;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_slides(board, from, color, &BISHOP_DIRECTIONS, out);
}
