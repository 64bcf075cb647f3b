//! Geometry shared by the per-piece generators: ray casting for sliding
//! pieces and fixed offsets for leaping pieces.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Color;

/// Walk each direction outward from `piece` until the edge, a friendly piece
/// (excluded) or an enemy piece (included, then stop).
pub fn cast_rays(board: &Board, piece: &Piece, directions: &[(i8, i8)], out: &mut BTreeSet<Square>) {
    for &(d_file, d_rank) in directions {
        for distance in 1..BOARD_SIZE {
            let Some(target) = piece.square.offset(d_file * distance, d_rank * distance) else {
                break;
            };
            match board.occupant(target) {
                Some(occupant) if occupant.color == piece.color => break,
                Some(_) => {
                    out.insert(target);
                    break;
                }
                None => {
                    out.insert(target);
                }
            }
        }
    }
}

/// Add every offset target that is on the board and not held by a friend.
pub fn leap_to_offsets(board: &Board, piece: &Piece, offsets: &[(i8, i8)], out: &mut BTreeSet<Square>) {
    for &(d_file, d_rank) in offsets {
        if let Some(target) = piece.square.offset(d_file, d_rank) {
            if !holds_friend(board, target, piece.color) {
                out.insert(target);
            }
        }
    }
}

#[inline]
pub fn holds_enemy(board: &Board, square: Square, color: Color) -> bool {
    board.occupant(square).is_some_and(|occupant| occupant.color != color)
}

#[inline]
pub fn holds_friend(board: &Board, square: Square, color: Color) -> bool {
    board.occupant(square).is_some_and(|occupant| occupant.color == color)
}
