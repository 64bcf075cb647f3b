//! Pawn destinations: single and double pushes, diagonal captures and en
//! passant.
//!
//! En-passant captures are returned alongside the destinations so the executor
//! can remove the passed pawn when one of those targets is chosen.

use crate::board::board::Board;
use crate::board::piece::{EnPassantCapture, PendingEnPassant, Piece};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoves;
use crate::move_generation::legal_move_shared::holds_enemy;

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, game_state: &GameState, out: &mut LegalMoves) {
    let direction = pawn.color.pawn_direction();
    let from = pawn.square;

    // Pawns never capture straight ahead.
    let single_step = from.offset(0, direction);
    if let Some(to) = single_step {
        if board.is_empty(to) {
            out.destinations.insert(to);
        }
    }

    for d_file in [-1, 1] {
        if let Some(to) = from.offset(d_file, direction) {
            if holds_enemy(board, to, pawn.color) {
                out.destinations.insert(to);
            }
        }
    }

    if pawn.is_first_move {
        if let Some(to) = from.offset(0, 2 * direction) {
            let path_clear = !game_state.rules.double_step_requires_clear_path
                || single_step.is_some_and(|passed| board.is_empty(passed));
            if path_clear && board.is_empty(to) {
                out.destinations.insert(to);
            }
        }
    }

    out.en_passant = PendingEnPassant {
        left: en_passant_capture(board, pawn, -1, game_state.move_count),
        right: en_passant_capture(board, pawn, 1, game_state.move_count),
    };
    for capture in [out.en_passant.left, out.en_passant.right].into_iter().flatten() {
        out.destinations.insert(capture.target);
    }
}

/// En passant towards `d_file`: the pawn beside us on our fifth rank double
/// stepped on the move the clock currently shows, and the square behind it is
/// free.
fn en_passant_capture(
    board: &Board,
    pawn: &Piece,
    d_file: i8,
    move_count: u32,
) -> Option<EnPassantCapture> {
    if pawn.square.rank() != pawn.color.en_passant_rank() {
        return None;
    }
    let beside = pawn.square.offset(d_file, 0)?;
    let victim = board.occupant(beside)?;
    if !victim.is_enemy_of(pawn) || !victim.can_be_taken_en_passant(move_count) {
        return None;
    }
    let target = pawn.square.offset(d_file, pawn.color.pawn_direction())?;
    board.is_empty(target).then_some(EnPassantCapture {
        target,
        victim: victim.id,
    })
}
