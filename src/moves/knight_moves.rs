use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_shared::push_steps;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_steps(board, from, color, &KNIGHT_OFFSETS, out);
}
