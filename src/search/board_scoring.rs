//! Static position evaluation used as the search's leaf heuristic.
//!
//! Material plus piece-square bonuses for pawns and knights, scored from a
//! chosen color's point of view, with a fixed bonus when either side is
//! checkmated. Draws by repetition or insufficient material are not detected.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::game_status::checkmate;

pub const CHECKMATE_BONUS: i32 = 10_000;

/// Rows as seen by White: row 0 is the far (promotion) rank.
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub trait BoardScorer: Send + Sync {
    /// Score from `perspective`'s point of view; higher is better for it.
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

/// Material, pawn/knight tables and the checkmate bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    /// Table bonus; Black reads the tables mirrored top-to-bottom.
    #[inline]
    pub fn position_bonus(piece: Piece, square: Square) -> i32 {
        let row = match piece.color {
            Color::White => square.row,
            Color::Black => 7 - square.row,
        } as usize;
        let col = square.col as usize;

        match piece.kind {
            PieceKind::Pawn => PAWN_TABLE[row][col],
            PieceKind::Knight => KNIGHT_TABLE[row][col],
            PieceKind::King | PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => 0,
        }
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        let mut score = 0i32;
        for (square, piece) in board.pieces() {
            let value = Self::piece_value(piece.kind) + Self::position_bonus(piece, square);
            if piece.color == perspective {
                score += value;
            } else {
                score -= value;
            }
        }

        if checkmate(board, perspective) {
            score -= CHECKMATE_BONUS;
        } else if checkmate(board, perspective.opposite()) {
            score += CHECKMATE_BONUS;
        }

        score
    }
}

/// `StandardScorer` evaluation of `board` for `perspective`.
#[inline]
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    StandardScorer.score(board, perspective)
}
