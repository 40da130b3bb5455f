//! Crate root module declarations for the casual chess rules engine.
//!
//! Exposes the board model, move generation, game state transitions, the
//! minimax search with its engine wrappers, and the display/persistence
//! helpers so binaries, benches and front ends share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod game_snapshot;
    pub mod render_game_state;
}
