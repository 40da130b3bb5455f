//! JSON snapshots of a game in progress.
//!
//! The state is stored as-is, so loading a snapshot restores the exact
//! position, history and en-passant right.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: GameState,
}

impl GameSnapshot {
    pub fn new(state: GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state,
        }
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ChessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
