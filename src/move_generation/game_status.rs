//! Terminal state classification.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, Square};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// `color` is in check and has no legal move.
pub fn checkmate(board: &Board, color: Color) -> bool {
    in_check(board, color) && !has_any_legal_move(board, color, None)
}

/// `color` is not in check and has no legal move.
pub fn stalemate(board: &Board, color: Color) -> bool {
    !in_check(board, color) && !has_any_legal_move(board, color, None)
}

/// Status of the game with `color` to move. Draws by agreement are never
/// derived here.
pub fn classify_status(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
) -> GameStatus {
    if has_any_legal_move(board, color, en_passant_target) {
        return GameStatus::Playing;
    }
    if in_check(board, color) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
