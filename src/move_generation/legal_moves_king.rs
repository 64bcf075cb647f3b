//! King destinations: the eight adjacent squares. No check avoidance and no
//! castling.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game_state::chess_rules::KING_OFFSETS;
use crate::move_generation::legal_move_shared::leap_to_offsets;

pub fn generate_king_moves(board: &Board, king: &Piece, out: &mut BTreeSet<Square>) {
    leap_to_offsets(board, king, &KING_OFFSETS, out);
}
