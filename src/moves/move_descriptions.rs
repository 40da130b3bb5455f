//! Move record produced by the legal move generator and the game state
//! transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// One move, with a pre-move snapshot of the moving piece.
///
/// `promotion` is part of the record shape but is never populated: pawns
/// reaching the last rank stay pawns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    #[serde(default)]
    pub is_en_passant: bool,
    #[serde(default)]
    pub is_castling: bool,
    #[serde(default)]
    pub promotion: Option<PieceKind>,
    pub notation: String,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Coordinate pair such as `e2e4`, independent of the short notation.
    pub fn coordinates(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}
