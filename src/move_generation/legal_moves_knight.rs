//! Knight destinations: eight fixed leaps, intervening squares ignored.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::move_generation::legal_move_shared::leap_to_offsets;

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut BTreeSet<Square>) {
    leap_to_offsets(board, knight, &KNIGHT_OFFSETS, out);
}
