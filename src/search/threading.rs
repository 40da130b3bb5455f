//! Background search execution and shared stop control.
//!
//! `SharedSearchState` is the cancellation and node-accounting block checked
//! by the search between recursive calls. `spawn_search` runs a search on a
//! worker thread over its own copy of the board, so concurrent searches need
//! no locking.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::{search, SearchConfig, SearchResult};

/// Shared cancellation and accounting state for one search.
#[derive(Debug, Default)]
pub struct SharedSearchState {
    stop: AtomicBool,
    pub nodes_visited: AtomicU64,
    node_budget: AtomicU64, // 0 means unlimited
}

impl SharedSearchState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_node_budget(&self, budget: Option<u64>) {
        self.node_budget.store(budget.unwrap_or(0), Ordering::Relaxed);
    }

    /// Clears the node counter but keeps a pending stop request.
    #[inline]
    pub fn reset_nodes(&self) {
        self.nodes_visited.store(0, Ordering::Relaxed);
    }

    /// Adds node count and returns true if the node budget is exhausted.
    #[inline]
    pub fn bump_nodes_and_check_budget(&self, n: u64) -> bool {
        let new_nodes = self.nodes_visited.fetch_add(n, Ordering::Relaxed) + n;
        let limit = self.node_budget.load(Ordering::Relaxed);
        limit != 0 && new_nodes >= limit
    }
}

/// Handle to a search running on a worker thread.
pub struct SearchHandle {
    shared: Arc<SharedSearchState>,
    handle: JoinHandle<SearchResult>,
}

impl SearchHandle {
    /// Ask the worker to stop; the result then reports `completed == false`.
    pub fn cancel(&self) {
        debug!("search cancellation requested");
        self.shared.request_stop();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn nodes_visited(&self) -> u64 {
        self.shared.nodes_visited.load(Ordering::Relaxed)
    }

    pub fn join(self) -> ChessResult<SearchResult> {
        self.handle
            .join()
            .map_err(|_| ChessError::SearchThreadPanicked)
    }
}

/// Run `search` for `color` on a worker thread.
pub fn spawn_search(
    board: Board,
    color: Color,
    en_passant_target: Option<Square>,
    config: SearchConfig,
) -> SearchHandle {
    let shared = SharedSearchState::new();
    let worker_shared = Arc::clone(&shared);
    let handle = thread::spawn(move || {
        search(
            &board,
            color,
            en_passant_target,
            config,
            &StandardScorer,
            &worker_shared,
        )
    });
    SearchHandle { shared, handle }
}
