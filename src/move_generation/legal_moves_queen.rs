//! Queen destinations: all eight rays.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game_state::chess_rules::QUEEN_DIRECTIONS;
use crate::move_generation::legal_move_shared::cast_rays;

pub fn generate_queen_moves(board: &Board, queen: &Piece, out: &mut BTreeSet<Square>) {
    cast_rays(board, queen, &QUEEN_DIRECTIONS, out);
}
