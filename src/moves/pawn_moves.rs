//! Pawn geometry: pushes, the double step from the start row, diagonal
//! captures and the en-passant diagonal onto an empty target square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub fn pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        match board.get(target) {
            Some(occupant) if occupant.color != color => out.push(target),
            None if en_passant_target == Some(target) => out.push(target),
            _ => {}
        }
    }
}
