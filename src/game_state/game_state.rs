//! Full game state and the move transition between states.
//!
//! `GameState` is a plain value: `apply_move` never mutates `self`, it returns
//! the successor state. Board side effects (rook relocation, en-passant pawn
//! removal) come from the shared board transition so the state and the
//! search always agree on the resulting position.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::{initial_board, Board};
use crate::game_state::chess_types::{Color, GameStatus, Piece, Square};
use crate::move_generation::game_status::classify_status;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;

/// Captured pieces, keyed by the color of the piece that was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    // Transient UI selection; cleared by every applied move.
    #[serde(default)]
    pub selected_square: Option<Square>,
    #[serde(default)]
    pub valid_moves: Vec<Square>,
    pub last_move: Option<Move>,
    pub move_history: Vec<Move>,
    pub captured_pieces: CapturedPieces,
    pub is_check: bool,
    pub status: GameStatus,
    /// Square a pawn may capture onto en passant, valid for one half-move.
    pub en_passant_target: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position with White to move.
    pub fn new_game() -> Self {
        Self::from_board(initial_board(), Color::White)
    }

    /// Start from an arbitrary board. Status and check flag are derived
    /// from the position.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self::from_position(board, current_player, None)
    }

    /// Like `from_board`, with an en-passant right left by the previous
    /// half-move.
    pub fn from_position(
        board: Board,
        current_player: Color,
        en_passant_target: Option<Square>,
    ) -> Self {
        let mut state = Self {
            board,
            current_player,
            selected_square: None,
            valid_moves: Vec::new(),
            last_move: None,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            is_check: false,
            status: GameStatus::Playing,
            en_passant_target,
        };
        state.refresh_status();
        state
    }

    /// Legal destinations for the piece on `square`, empty when the square
    /// is empty.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Square> {
        if !square.is_on_board() {
            return Vec::new();
        }
        match self.board.get(square) {
            Some(piece) => legal_moves(&self.board, square, piece, self.en_passant_target),
            None => Vec::new(),
        }
    }

    /// Select `square` if it holds a piece of the side to move, otherwise
    /// clear the selection.
    pub fn select_square(&mut self, square: Square) -> &[Square] {
        if !square.is_on_board() {
            self.clear_selection();
            return &self.valid_moves;
        }
        match self.board.get(square) {
            Some(piece) if piece.color == self.current_player && !self.status.is_over() => {
                self.valid_moves = legal_moves(&self.board, square, piece, self.en_passant_target);
                self.selected_square = Some(square);
            }
            _ => self.clear_selection(),
        }
        &self.valid_moves
    }

    pub fn clear_selection(&mut self) {
        self.selected_square = None;
        self.valid_moves.clear();
    }

    /// Apply `from -> to` without a legality check.
    ///
    /// Callers are expected to pick `to` from `legal_moves_from(from)`.
    /// An empty `from` leaves the state unchanged.
    pub fn apply_move(&self, from: Square, to: Square) -> GameState {
        let Some(transition) = apply_move_to_board(&self.board, from, to, self.en_passant_target)
        else {
            warn!(%from, %to, "apply_move called on an empty square");
            return self.clone();
        };

        let mut next = self.clone();
        let mv = transition.mv;

        if let Some(captured) = mv.captured_piece {
            next.captured_pieces.push(captured);
        }

        next.board = transition.board;
        next.en_passant_target = transition.en_passant_target;
        next.current_player = self.current_player.opposite();
        next.clear_selection();
        next.move_history.push(mv.clone());
        next.last_move = Some(mv);
        next.refresh_status();

        debug!(
            notation = next.last_move.as_ref().map(|m| m.notation.as_str()).unwrap_or("-"),
            en_passant = ?next.en_passant_target,
            check = next.is_check,
            "move applied"
        );
        if next.status.is_over() {
            info!(status = %next.status, "game over");
        }
        next
    }

    /// Validated variant of `apply_move`.
    pub fn try_apply_move(&self, from: Square, to: Square) -> ChessResult<GameState> {
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(ChessError::InvalidSquare(format!(
                    "row {} col {}",
                    square.row, square.col
                )));
            }
        }
        let piece = self.board.get(from).ok_or(ChessError::NoPieceAtSquare(from))?;
        if piece.color != self.current_player {
            return Err(ChessError::WrongPieceColor {
                square: from,
                expected: self.current_player,
            });
        }
        if !legal_moves(&self.board, from, piece, self.en_passant_target).contains(&to) {
            return Err(ChessError::InvalidMove { from, to });
        }
        Ok(self.apply_move(from, to))
    }

    /// The side to move gives up; the opponent wins.
    pub fn resign(&self) -> GameState {
        let mut next = self.clone();
        next.status = GameStatus::Checkmate;
        next.clear_selection();
        info!(loser = %self.current_player, "resigned");
        next
    }

    pub fn agree_draw(&self) -> GameState {
        let mut next = self.clone();
        next.status = GameStatus::Draw;
        next.clear_selection();
        info!("draw agreed");
        next
    }

    /// Winner after checkmate or resignation: the side not on move.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.current_player.opposite()),
            _ => None,
        }
    }

    fn refresh_status(&mut self) {
        self.is_check = in_check(&self.board, self.current_player);
        self.status = classify_status(&self.board, self.current_player, self.en_passant_target);
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::errors::ChessError;
    use crate::game_state::board::{initial_board, Board};
    use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    /// White Ke4 in check from a pawn that just double-stepped to d5;
    /// exd6 en passant is the only legal reply.
    fn en_passant_escape_board() -> Board {
        let mut board = Board::empty();
        let black = |kind| Piece::new(kind, Color::Black).moved();
        board.place(sq(4, 4), Piece::new(PieceKind::King, Color::White).moved());
        board.place(sq(3, 4), Piece::new(PieceKind::Pawn, Color::White).moved());
        board.place(sq(3, 3), black(PieceKind::Pawn));
        board.place(sq(2, 2), black(PieceKind::Pawn));
        board.place(sq(2, 4), black(PieceKind::Pawn));
        board.place(sq(0, 0), black(PieceKind::King));
        board.place(sq(7, 3), black(PieceKind::Rook));
        board.place(sq(7, 5), black(PieceKind::Rook));
        board.place(sq(6, 2), black(PieceKind::Knight));
        board
    }

    fn play(state: GameState, moves: &[((u8, u8), (u8, u8))]) -> GameState {
        moves.iter().fold(state, |state, &((fr, fc), (tr, tc))| {
            state
                .try_apply_move(sq(fr, fc), sq(tr, tc))
                .expect("scripted move should be legal")
        })
    }

    #[test]
    fn new_game_starts_with_white_playing() {
        let state = GameState::new_game();
        assert_eq!(state.current_player, Color::White);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.is_check);
        assert!(state.move_history.is_empty());
        assert_eq!(state.en_passant_target, None);
        assert_eq!(state.board, initial_board());
    }

    #[test]
    fn double_step_sets_target_and_en_passant_captures() {
        let mut board = initial_board();
        board.set(sq(1, 3), None);
        board.place(sq(4, 3), Piece::new(PieceKind::Pawn, Color::Black).moved());
        let state = GameState::from_board(board, Color::White);

        let state = state.apply_move(sq(6, 4), sq(4, 4));
        assert_eq!(state.en_passant_target, Some(sq(5, 4)));
        assert!(state.legal_moves_from(sq(4, 3)).contains(&sq(5, 4)));

        let state = state
            .try_apply_move(sq(4, 3), sq(5, 4))
            .expect("en passant should be legal");
        let mv = state.last_move.clone().expect("move recorded");
        assert!(mv.is_en_passant);
        assert_eq!(
            mv.captured_piece.map(|p| (p.kind, p.color)),
            Some((PieceKind::Pawn, Color::White))
        );
        assert_eq!(state.board.get(sq(4, 4)), None);
        assert_eq!(state.captured_pieces.of(Color::White).len(), 1);
        assert_eq!(state.en_passant_target, None);
    }

    #[test]
    fn en_passant_right_expires_after_one_half_move() {
        let state = play(GameState::new_game(), &[((6, 4), (4, 4))]);
        assert_eq!(state.en_passant_target, Some(sq(5, 4)));
        let state = play(state, &[((0, 6), (2, 5))]);
        assert_eq!(state.en_passant_target, None);
    }

    #[test]
    fn castling_relocates_rook() {
        let mut board = Board::empty();
        board.place(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place(sq(7, 7), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
        let state = GameState::from_board(board, Color::White);

        let state = state
            .try_apply_move(sq(7, 4), sq(7, 6))
            .expect("castling should be legal");
        let king = state.board.get(sq(7, 6)).expect("king on g1");
        let rook = state.board.get(sq(7, 5)).expect("rook on f1");
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(king.has_moved && rook.has_moved);
        assert_eq!(state.board.get(sq(7, 7)), None);
        let mv = state.last_move.expect("move recorded");
        assert!(mv.is_castling);
        assert_eq!(mv.notation, "Kg1");
    }

    #[test]
    fn fools_mate_ends_in_checkmate_for_black() {
        let state = play(
            GameState::new_game(),
            &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
        );
        assert_eq!(state.status, GameStatus::Checkmate);
        assert!(state.is_check);
        assert_eq!(state.winner(), Some(Color::Black));

        let notation: Vec<&str> = state.move_history.iter().map(|m| m.notation.as_str()).collect();
        assert_eq!(notation, ["f3", "e5", "g4", "Qh4"]);

        let err = state
            .try_apply_move(sq(6, 0), sq(5, 0))
            .expect_err("no moves after mate");
        assert!(matches!(err, ChessError::GameOver(GameStatus::Checkmate)));
    }

    #[test]
    fn captures_are_listed_by_captured_color() {
        let state = play(
            GameState::new_game(),
            &[((6, 4), (4, 4)), ((1, 3), (3, 3)), ((4, 4), (3, 3))],
        );
        let mv = state.last_move.clone().expect("move recorded");
        assert_eq!(mv.notation, "exd5");
        assert_eq!(state.captured_pieces.of(Color::Black).len(), 1);
        assert!(state.captured_pieces.of(Color::White).is_empty());
    }

    #[test]
    fn try_apply_move_rejects_bad_input() {
        let state = GameState::new_game();
        assert!(matches!(
            state.try_apply_move(sq(4, 4), sq(3, 4)),
            Err(ChessError::NoPieceAtSquare(_))
        ));
        assert!(matches!(
            state.try_apply_move(sq(1, 4), sq(3, 4)),
            Err(ChessError::WrongPieceColor { expected: Color::White, .. })
        ));
        assert!(matches!(
            state.try_apply_move(sq(6, 4), sq(3, 4)),
            Err(ChessError::InvalidMove { .. })
        ));
    }

    #[test]
    fn off_board_squares_are_rejected() {
        let mut state = GameState::new_game();
        assert!(matches!(
            state.try_apply_move(Square { row: 8, col: 0 }, sq(5, 0)),
            Err(ChessError::InvalidSquare(_))
        ));
        assert!(matches!(
            state.try_apply_move(sq(6, 0), Square { row: 6, col: 9 }),
            Err(ChessError::InvalidSquare(_))
        ));
        assert!(state.legal_moves_from(Square { row: 9, col: 9 }).is_empty());
        assert!(state.select_square(Square { row: 0, col: 8 }).is_empty());
        assert_eq!(state.selected_square, None);
    }

    #[test]
    fn en_passant_right_counts_for_status() {
        let board = en_passant_escape_board();
        assert_eq!(
            GameState::from_board(board, Color::White).status,
            GameStatus::Checkmate
        );

        let state = GameState::from_position(board, Color::White, Some(sq(2, 3)));
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.is_check);
        assert_eq!(state.legal_moves_from(sq(3, 4)), vec![sq(2, 3)]);
    }

    #[test]
    fn selection_only_accepts_own_pieces() {
        let mut state = GameState::new_game();
        assert_eq!(state.select_square(sq(6, 4)), &[sq(5, 4), sq(4, 4)]);
        assert_eq!(state.selected_square, Some(sq(6, 4)));

        assert!(state.select_square(sq(1, 4)).is_empty());
        assert_eq!(state.selected_square, None);

        state.select_square(sq(7, 6));
        let next = state.apply_move(sq(7, 6), sq(5, 5));
        assert_eq!(next.selected_square, None);
        assert!(next.valid_moves.is_empty());
    }

    #[test]
    fn resign_and_draw_overwrite_status() {
        let state = GameState::new_game();
        let resigned = state.resign();
        assert_eq!(resigned.status, GameStatus::Checkmate);
        assert_eq!(resigned.winner(), Some(Color::Black));

        let drawn = state.agree_draw();
        assert_eq!(drawn.status, GameStatus::Draw);
        assert_eq!(drawn.winner(), None);
    }
}
