//! Errors used throughout the chess engine.
//!
//! The rule functions themselves never fail: an empty legal-move set or a
//! `None` search result is how they report "nothing to do". `ChessError` is
//! reserved for the defensive surfaces around them, such as validated move
//! application on a session, undo, difficulty parsing, snapshot
//! (de)serialization and joins on background searches.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameStatus, Square};

/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum ChessError {
    /// `to` is not a legal destination for the piece on `from`.
    #[error("invalid move from {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// Tried to move from an empty square.
    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),

    /// The piece on `square` belongs to the side that is not on move.
    #[error("piece at {square} does not belong to {expected}")]
    WrongPieceColor { square: Square, expected: Color },

    /// The game already ended; no further moves are accepted.
    #[error("game is over ({0})")]
    GameOver(GameStatus),

    /// Undo requested with an empty snapshot stack.
    #[error("no moves to undo")]
    NothingToUndo,

    /// A coordinate string such as `e4` could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A difficulty name other than easy/medium/hard.
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),

    /// Malformed command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Saved game could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The search was stopped before any root move had been scored.
    #[error("search cancelled before a move was found")]
    SearchCancelled,

    /// The background search thread panicked.
    #[error("search thread panicked")]
    SearchThreadPanicked,
}

pub type ChessResult<T> = Result<T, ChessError>;
