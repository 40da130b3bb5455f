//! Board-level move transition.
//!
//! Relocates the moving piece and performs the special-move side effects:
//! en-passant pawn removal, castling rook relocation, and the en-passant
//! target for the next half-move. The legal move generator, the search and
//! `GameState::apply_move` all go through `apply_move_to_board`, so a
//! simulated move and a played move always produce the same board.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castling_rook_cols, CASTLING_KING_DISTANCE};
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::notate;

/// Result of applying one move to a board.
#[derive(Debug, Clone)]
pub struct BoardTransition {
    pub board: Board,
    pub mv: Move,
    /// Square skipped by a double pawn step, valid for the next half-move only.
    pub en_passant_target: Option<Square>,
}

/// Describe `from -> to` against the pre-move board without applying it.
///
/// `captured_piece` is the destination occupant, or the bypassed pawn for an
/// en-passant capture.
pub fn build_move(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Move {
    let is_en_passant = is_en_passant_capture(board, to, piece, en_passant_target);
    let captured_piece = if is_en_passant {
        en_passant_victim_square(to, piece).and_then(|sq| board.get(sq))
    } else {
        board.get(to)
    };

    Move {
        from,
        to,
        piece,
        captured_piece,
        is_en_passant,
        is_castling: is_castling_displacement(from, to, piece),
        promotion: None,
        notation: notate(board, from, to, piece),
    }
}

/// Apply `from -> to`. Returns `None` when `from` is empty.
///
/// No legality check happens here; callers gate through the legal move
/// generator first.
pub fn apply_move_to_board(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Option<BoardTransition> {
    let piece = board.get(from)?;
    let mv = build_move(board, from, to, piece, en_passant_target);
    let next = simulate_move(board, from, to, piece, en_passant_target);

    let next_en_passant = if piece.kind == PieceKind::Pawn && from.row.abs_diff(to.row) == 2 {
        Square::new((from.row + to.row) / 2, from.col)
    } else {
        None
    };

    Some(BoardTransition {
        board: next,
        mv,
        en_passant_target: next_en_passant,
    })
}

/// Board after moving `piece` from `from` to `to`, side effects included.
pub fn simulate_move(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Board {
    let mut next = *board;
    let is_en_passant = is_en_passant_capture(board, to, piece, en_passant_target);

    next.set(from, None);
    next.place(to, piece.moved());

    if is_en_passant {
        if let Some(victim) = en_passant_victim_square(to, piece) {
            next.set(victim, None);
        }
    }

    if is_castling_displacement(from, to, piece) {
        let (rook_from_col, rook_to_col) = castling_rook_cols(to.col, from.col);
        let rook_from = Square {
            row: from.row,
            col: rook_from_col,
        };
        let rook_to = Square {
            row: from.row,
            col: rook_to_col,
        };
        if let Some(rook) = next.take(rook_from) {
            next.place(rook_to, rook.moved());
        }
    }

    next
}

#[inline]
fn is_en_passant_capture(
    board: &Board,
    to: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> bool {
    piece.kind == PieceKind::Pawn && en_passant_target == Some(to) && board.is_empty_at(to)
}

#[inline]
fn is_castling_displacement(from: Square, to: Square, piece: Piece) -> bool {
    piece.kind == PieceKind::King && from.col.abs_diff(to.col) == CASTLING_KING_DISTANCE
}

/// The pawn bypassed by an en-passant capture sits one row behind the
/// destination, toward the capturer's own back rank.
#[inline]
fn en_passant_victim_square(to: Square, piece: Piece) -> Option<Square> {
    to.offset(-piece.color.pawn_direction(), 0)
}
