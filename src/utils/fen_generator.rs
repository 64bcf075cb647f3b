//! FEN generation from a board and game state.
//!
//! Castling is never available and the halfmove clock is not tracked, so those
//! fields are always `-` and `0`.

use crate::board::board::Board;
use crate::board::square::Square;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

pub fn generate_fen(board: &Board, game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_SIZE).rev() {
        let mut empty = 0;
        for file in 0..BOARD_SIZE {
            match Square::new(file, rank).and_then(|square| board.occupant(square)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.turn {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push_str(" - ");

    match en_passant_target(board, game_state) {
        Some(square) => out.push_str(&square.to_string()),
        None => out.push('-'),
    }

    let full_move_number = game_state.move_count / 2 + 1;
    out.push_str(&format!(" 0 {full_move_number}"));
    out
}

/// Square behind a pawn of the side not to move that can still be taken en
/// passant.
fn en_passant_target(board: &Board, game_state: &GameState) -> Option<Square> {
    let passed_by = game_state.turn.opposite();
    board
        .pieces_of(passed_by)
        .find(|pawn| pawn.can_be_taken_en_passant(game_state.move_count))
        .and_then(|pawn| pawn.square.offset(0, -passed_by.pawn_direction()))
}
