//! Legal move generation.
//!
//! Wraps the pseudo-legal generator, synthesizes castling destinations for an
//! eligible king, and discards every candidate whose simulated board leaves
//! the mover's king attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castling_rook_cols, KING_START_COL};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_apply::{build_move, simulate_move};
use crate::move_generation::legal_move_checks::{in_check, is_square_attacked};
use crate::move_generation::pseudo_moves::pseudo_moves_into;
use crate::moves::move_descriptions::Move;

/// Legal destinations for `piece` standing on `square`.
pub fn legal_moves(
    board: &Board,
    square: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut candidates = Vec::with_capacity(28);
    pseudo_moves_into(board, square, piece, en_passant_target, &mut candidates);
    if piece.kind == PieceKind::King {
        push_castling_targets(board, square, piece, &mut candidates);
    }

    candidates.retain(|&to| {
        let hypothetical = simulate_move(board, square, to, piece, en_passant_target);
        !in_check(&hypothetical, piece.color)
    });
    candidates
}

/// Every legal move of `color`, without an en-passant target.
#[inline]
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    all_legal_moves_with_en_passant(board, color, None)
}

/// Every legal move of `color`, scanning squares row-major and keeping each
/// piece's destination order.
pub fn all_legal_moves_with_en_passant(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for (from, piece) in board.pieces_of(color) {
        for to in legal_moves(board, from, piece, en_passant_target) {
            moves.push(build_move(board, from, to, piece, en_passant_target));
        }
    }
    moves
}

/// Short-circuiting emptiness test for the legal move set.
pub fn has_any_legal_move(board: &Board, color: Color, en_passant_target: Option<Square>) -> bool {
    board
        .pieces_of(color)
        .any(|(from, piece)| !legal_moves(board, from, piece, en_passant_target).is_empty())
}

/// Castling destinations for an unmoved king on its home square.
///
/// Requires an unmoved rook of the same color in the corner, empty squares
/// between king and rook, and a king that is neither in check nor crossing
/// an attacked square. Landing-square safety is left to the common filter.
fn push_castling_targets(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    let color = king.color;
    let row = color.back_rank();
    if king.has_moved || from.row != row || from.col != KING_START_COL {
        return;
    }
    if in_check(board, color) {
        return;
    }

    for king_to_col in [KING_START_COL + 2, KING_START_COL - 2] {
        let (rook_col, transit_col) = castling_rook_cols(king_to_col, KING_START_COL);
        let rook_ok = matches!(
            board.get(Square { row, col: rook_col }),
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
        );
        if !rook_ok {
            continue;
        }

        let (low, high) = if rook_col > KING_START_COL {
            (KING_START_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_START_COL)
        };
        if (low..high).any(|col| !board.is_empty_at(Square { row, col })) {
            continue;
        }

        if is_square_attacked(board, Square { row, col: transit_col }, color.opposite()) {
            continue;
        }

        out.push(Square {
            row,
            col: king_to_col,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, all_legal_moves_with_en_passant, legal_moves};
    use crate::game_state::board::{initial_board, Board};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::move_generation::legal_move_apply::apply_move_to_board;
    use crate::move_generation::legal_move_checks::in_check;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("a1"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board
    }

    #[test]
    fn twenty_legal_moves_at_start() {
        let board = initial_board();
        assert_eq!(all_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(all_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn start_moves_follow_row_major_order() {
        let board = initial_board();
        let moves = all_legal_moves(&board, Color::White);
        assert_eq!(moves[0].from, sq("a2"));
        assert_eq!(moves[0].notation, "a3");
        assert_eq!(moves[1].notation, "a4");
        assert_eq!(moves.last().map(|m| m.notation.as_str()), Some("Nh3"));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("e2"), Piece::new(PieceKind::Bishop, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::Rook, Color::Black));
        board.place(sq("a8"), Piece::new(PieceKind::King, Color::Black));

        let bishop = board.get(sq("e2")).expect("bishop on e2");
        assert!(legal_moves(&board, sq("e2"), bishop, None).is_empty());
    }

    #[test]
    fn no_legal_move_leaves_own_king_in_check() {
        let mut board = initial_board();
        let mut en_passant = None;
        let mut color = Color::White;
        // Italian-style opening with an exposed e-file.
        for (from, to) in [
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("d8", "h4"),
            ("g1", "f3"),
            ("h4", "f2"),
        ] {
            let t = apply_move_to_board(&board, sq(from), sq(to), en_passant).expect("piece moves");
            board = t.board;
            en_passant = t.en_passant_target;
            color = color.opposite();
        }

        for mv in all_legal_moves_with_en_passant(&board, color, en_passant) {
            let t = apply_move_to_board(&board, mv.from, mv.to, en_passant).expect("legal move");
            assert!(!in_check(&t.board, color), "{} leaves king in check", mv.notation);
        }
    }

    #[test]
    fn king_may_castle_both_sides_when_clear() {
        let board = castling_board();
        let king = board.get(sq("e1")).expect("king on e1");
        let targets = legal_moves(&board, sq("e1"), king, None);
        assert!(targets.contains(&sq("g1")));
        assert!(targets.contains(&sq("c1")));

        let moves = all_legal_moves(&board, Color::White);
        let castle = moves
            .iter()
            .find(|m| m.to == sq("g1"))
            .expect("kingside castling move");
        assert!(castle.is_castling);
        assert_eq!(castle.notation, "Kg1");
    }

    #[test]
    fn castling_is_refused_through_attack_or_after_moving() {
        let mut board = castling_board();
        board.place(sq("f8"), Piece::new(PieceKind::Rook, Color::Black));
        let king = board.get(sq("e1")).expect("king on e1");
        let targets = legal_moves(&board, sq("e1"), king, None);
        assert!(!targets.contains(&sq("g1")));
        assert!(targets.contains(&sq("c1")));

        let board = castling_board();
        let moved_king = king.moved();
        let targets = legal_moves(&board, sq("e1"), moved_king, None);
        assert!(!targets.contains(&sq("g1")));
        assert!(!targets.contains(&sq("c1")));
    }

    #[test]
    fn castling_is_refused_with_piece_in_between_or_in_check() {
        let mut board = castling_board();
        board.place(sq("b1"), Piece::new(PieceKind::Knight, Color::White));
        let king = board.get(sq("e1")).expect("king on e1");
        let targets = legal_moves(&board, sq("e1"), king, None);
        assert!(!targets.contains(&sq("c1")));
        assert!(targets.contains(&sq("g1")));

        let mut board = castling_board();
        board.place(sq("e5"), Piece::new(PieceKind::Rook, Color::Black));
        let targets = legal_moves(&board, sq("e1"), king, None);
        assert!(!targets.contains(&sq("c1")));
        assert!(!targets.contains(&sq("g1")));
    }

    #[test]
    fn en_passant_discovered_pin_is_detected() {
        // Capturing en passant would clear the fifth rank between rook and king.
        let mut board = Board::empty();
        board.place(sq("a5"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("b5"), Piece::new(PieceKind::Pawn, Color::White));
        board.place(sq("c5"), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(sq("h5"), Piece::new(PieceKind::Rook, Color::Black));
        board.place(sq("h8"), Piece::new(PieceKind::King, Color::Black));

        let pawn = board.get(sq("b5")).expect("pawn on b5");
        let targets = legal_moves(&board, sq("b5"), pawn, Some(sq("c6")));
        assert!(!targets.contains(&sq("c6")));
        assert!(targets.contains(&sq("b6")));
    }
}
