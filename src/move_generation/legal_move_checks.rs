//! King-safety queries.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::pseudo_moves::pseudo_moves_into;

/// True iff some opposing piece's pseudo-legal moves reach `color`'s king.
///
/// A board without a king of `color` reports `false`. That is a fallback for
/// malformed positions, not a statement that the king is safe.
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True iff any piece of `attacker` could capture on `square`.
///
/// Pawns attack only their forward diagonals, so an empty square in front of
/// a pawn is not counted as attacked.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(attacker) {
        if piece.kind == PieceKind::Pawn {
            let direction = attacker.pawn_direction();
            if from.offset(direction, -1) == Some(square) || from.offset(direction, 1) == Some(square)
            {
                return true;
            }
            continue;
        }

        targets.clear();
        pseudo_moves_into(board, from, piece, None, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{in_check, is_square_attacked};
    use crate::game_state::board::{initial_board, Board};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn nobody_is_in_check_at_start() {
        let board = initial_board();
        assert!(!in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let mut board = Board::empty();
        board.place(Square { row: 7, col: 4 }, Piece::new(PieceKind::King, Color::White));
        board.place(Square { row: 0, col: 4 }, Piece::new(PieceKind::Rook, Color::Black));
        board.place(Square { row: 0, col: 0 }, Piece::new(PieceKind::King, Color::Black));
        assert!(in_check(&board, Color::White));

        board.place(Square { row: 4, col: 4 }, Piece::new(PieceKind::Pawn, Color::White));
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_reports_not_in_check() {
        let mut board = Board::empty();
        board.place(Square { row: 0, col: 4 }, Piece::new(PieceKind::Queen, Color::Black));
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn pawn_push_square_is_not_attacked() {
        let mut board = Board::empty();
        board.place(Square { row: 6, col: 5 }, Piece::new(PieceKind::Pawn, Color::Black));
        assert!(!is_square_attacked(&board, Square { row: 7, col: 5 }, Color::Black));
        assert!(is_square_attacked(&board, Square { row: 7, col: 4 }, Color::Black));
        assert!(is_square_attacked(&board, Square { row: 7, col: 6 }, Color::Black));
    }
}
