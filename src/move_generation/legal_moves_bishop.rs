//! Bishop destinations: four diagonal rays.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::move_generation::legal_move_shared::cast_rays;

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut BTreeSet<Square>) {
    cast_rays(board, bishop, &BISHOP_DIRECTIONS, out);
}
