//! Pseudo-legal destination enumeration dispatched by piece kind.
//!
//! Pseudo-legal means geometry and occupancy only. Whether the mover's own
//! king is left attacked is the legal move generator's concern.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn pseudo_moves(
    board: &Board,
    square: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_moves_into(board, square, piece, en_passant_target, &mut out);
    out
}

pub fn pseudo_moves_into(
    board: &Board,
    square: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, color, en_passant_target, out),
        PieceKind::Knight => knight_moves(board, square, color, out),
        PieceKind::Bishop => bishop_moves(board, square, color, out),
        PieceKind::Rook => rook_moves(board, square, color, out),
        PieceKind::Queen => queen_moves(board, square, color, out),
        PieceKind::King => king_moves(board, square, color, out),
    }
}
