//! Canonical chess-rule constants.
//!
//! Starting layout of the back rank and castling geometry.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from file a to file h, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// King's starting column (the e-file).
pub const KING_START_COL: u8 = 4;

/// Column distance a king travels when castling.
pub const CASTLING_KING_DISTANCE: u8 = 2;

/// Rook relocation for a castling king: `(rook_from_col, rook_to_col)`
/// keyed by the direction the king moved.
#[inline]
pub const fn castling_rook_cols(king_to_col: u8, king_from_col: u8) -> (u8, u8) {
    if king_to_col > king_from_col {
        (7, 5)
    } else {
        (0, 3)
    }
}
