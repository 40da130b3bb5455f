//! Terminal-oriented Unicode board renderer and status text.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Render the board with rank 8 on top, White at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.get(Square { row, col }) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{}",
        render_board(&game_state.board),
        status_message(game_state)
    )
}

/// Human-readable description of whose turn it is or how the game ended.
pub fn status_message(game_state: &GameState) -> String {
    let to_move = game_state.current_player;
    match game_state.status {
        GameStatus::Checkmate => format!("{} wins by checkmate", to_move.opposite()),
        GameStatus::Stalemate => "Stalemate, the game is a draw".to_owned(),
        GameStatus::Draw => "The game is a draw".to_owned(),
        GameStatus::Playing if game_state.is_check => format!("{to_move} is in check"),
        GameStatus::Playing => format!("{to_move} to move"),
    }
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}
