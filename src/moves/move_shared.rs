//! Occupancy rules shared by the per-piece geometry generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Walk each direction one step at a time, stopping at the board edge or at
/// the first occupied square. An occupied square is included only when it
/// holds an opposing piece.
pub fn push_slides(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.get(next) {
                None => out.push(next),
                Some(target) => {
                    if target.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Single-step targets (knight, king): empty or opposing-occupied squares.
pub fn push_steps(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color == color => {}
            _ => out.push(to),
        }
    }
}
