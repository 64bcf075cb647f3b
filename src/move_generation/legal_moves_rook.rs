//! Rook destinations: four orthogonal rays.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::move_generation::legal_move_shared::cast_rays;

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut BTreeSet<Square>) {
    cast_rays(board, rook, &ROOK_DIRECTIONS, out);
}
