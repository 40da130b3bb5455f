//! 8x8 board model.
//!
//! `Board` is a small `Copy` value. Every consumer follows a clone-then-mutate
//! pattern, so simulations never write into a caller's board.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard chess starting position.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().copied().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                board.squares[color.back_rank() as usize][col as usize] =
                    Some(Piece::new(kind, color));
                board.squares[color.pawn_start_row() as usize][col as usize] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Remove and return the occupant of `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding a piece of `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}

/// Standard chess starting position.
#[inline]
pub fn initial_board() -> Board {
    Board::initial()
}

#[cfg(test)]
mod tests {
    use super::initial_board;
    use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn initial_board_has_sixteen_pieces_per_color() {
        let board = initial_board();
        assert_eq!(board.piece_count(Color::White), 16);
        assert_eq!(board.piece_count(Color::Black), 16);

        let pawns = board
            .pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
            .count();
        assert_eq!(pawns, 16);
    }

    #[test]
    fn initial_board_places_pieces_on_standard_squares() {
        let board = initial_board();
        for col in 0..8u8 {
            let white_back = board.get(Square { row: 7, col }).expect("white back rank");
            let black_back = board.get(Square { row: 0, col }).expect("black back rank");
            assert_eq!(white_back.kind, BACK_RANK_LAYOUT[col as usize]);
            assert_eq!(white_back.color, Color::White);
            assert_eq!(black_back.kind, BACK_RANK_LAYOUT[col as usize]);
            assert_eq!(black_back.color, Color::Black);

            let white_pawn = board.get(Square { row: 6, col }).expect("white pawn");
            let black_pawn = board.get(Square { row: 1, col }).expect("black pawn");
            assert_eq!(white_pawn.kind, PieceKind::Pawn);
            assert_eq!(black_pawn.kind, PieceKind::Pawn);
            assert!(!white_pawn.has_moved);
        }
        for row in 2..6u8 {
            for col in 0..8u8 {
                assert!(board.is_empty_at(Square { row, col }));
            }
        }
    }

    #[test]
    fn exactly_one_king_per_color() {
        let board = initial_board();
        assert_eq!(board.king_square(Color::White), Some(Square { row: 7, col: 4 }));
        assert_eq!(board.king_square(Color::Black), Some(Square { row: 0, col: 4 }));
    }
}
