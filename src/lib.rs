//! Crate root module declarations for the capture chess rules engine.
//!
//! Exposes the board model, game state, per-piece move generation, the move
//! executor and the `ChessGame` session, plus FEN, move-record and
//! random-playout helpers and the console front-end.

pub mod chess_errors;
pub mod chess_game;

pub mod board {
    pub mod board;
    pub mod piece;
    pub mod square;
}

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_record;
    pub mod random_play;
    pub mod render_game_state;
}

pub mod console {
    pub mod console_top;
}
