//! Turn driver around `GameState`.
//!
//! Holds the current state, a stack of previous states for undo, and an
//! optional computer opponent. Every accepted move pushes the pre-move state,
//! so undo is a pop rather than a replay of the history.

use tracing::{debug, info};

use crate::engines::engine_config::AiConfig;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub struct AiPlayer {
    pub color: Color,
    pub engine: MinimaxEngine,
}

pub struct GameSession {
    state: GameState,
    undo_stack: Vec<GameState>,
    ai: Option<AiPlayer>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Two human players.
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            undo_stack: Vec::new(),
            ai: None,
        }
    }

    /// Human against the computer, which plays `ai_color`.
    pub fn with_ai(ai_color: Color, config: AiConfig) -> Self {
        Self::from_state_with_ai(GameState::new_game(), ai_color, config)
    }

    pub fn from_state_with_ai(state: GameState, ai_color: Color, config: AiConfig) -> Self {
        let mut session = Self::from_state(state);
        session.ai = Some(AiPlayer {
            color: ai_color,
            engine: MinimaxEngine::new(config),
        });
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ai_color(&self) -> Option<Color> {
        self.ai.as_ref().map(|ai| ai.color)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Back to the starting position. The AI opponent, if any, is kept.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
        self.undo_stack.clear();
        if let Some(ai) = self.ai.as_mut() {
            ai.engine.new_game();
        }
        info!("new game");
    }

    pub fn select_square(&mut self, square: Square) -> &[Square] {
        self.state.select_square(square)
    }

    /// Play `from -> to` for the side to move after validating it.
    pub fn play_move(&mut self, from: Square, to: Square) -> ChessResult<&Move> {
        let next = self.state.try_apply_move(from, to)?;
        let previous = std::mem::replace(&mut self.state, next);
        self.undo_stack.push(previous);
        self.state
            .last_move
            .as_ref()
            .ok_or(ChessError::InvalidMove { from, to })
    }

    /// Restore the state before the last accepted move.
    pub fn undo(&mut self) -> ChessResult<()> {
        let previous = self.undo_stack.pop().ok_or(ChessError::NothingToUndo)?;
        debug!(remaining = self.undo_stack.len(), "undo");
        self.state = previous;
        Ok(())
    }

    pub fn resign(&mut self) {
        self.state = self.state.resign();
    }

    pub fn agree_draw(&mut self) {
        self.state = self.state.agree_draw();
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.state.status.is_over() && self.ai_color() == Some(self.state.current_player)
    }

    /// Let the computer move if it is its turn.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn or it has no
    /// legal move.
    pub fn play_ai_turn(&mut self) -> ChessResult<Option<Move>> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let Some(ai) = self.ai.as_mut() else {
            return Ok(None);
        };

        let output =
            ai.engine
                .choose_move(&self.state.board, ai.color, self.state.en_passant_target)?;
        let Some(mv) = output.best_move else {
            return Ok(None);
        };
        debug!(notation = %mv.notation, nodes = output.nodes, score = ?output.score, "ai move");
        self.play_move(mv.from, mv.to).cloned().map(Some)
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }
}
