//! Short algebraic notation and coordinate conversions.
//!
//! `notate` renders the compact form used by the move history: piece letter,
//! an `x` when the destination is occupied, and the destination square. It
//! does not disambiguate, does not mark check or mate, and does not emit
//! castling symbols; a castling king reads as `Kg1`.

use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

/// Render a move in short algebraic notation against the pre-move board.
pub fn notate(board: &Board, from: Square, to: Square, piece: Piece) -> String {
    let is_capture = !board.is_empty_at(to);

    match piece.kind.letter() {
        None => {
            if is_capture {
                format!("{}x{}", from.file_char(), to)
            } else {
                to.to_string()
            }
        }
        Some(letter) => {
            let mut out = String::with_capacity(4);
            out.push(letter);
            if is_capture {
                out.push('x');
            }
            out.push_str(&to.to_string());
            out
        }
    }
}

/// Convert a coordinate such as `e4` to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square {
        row: 8 - (rank - b'0'),
        col: file - b'a',
    })
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}
