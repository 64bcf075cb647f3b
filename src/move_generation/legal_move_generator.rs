//! Legal destination generation for a single piece.
//!
//! Dispatches on the piece kind to one generator per kind. Generation never
//! touches the board; the en-passant captures it finds are returned with the
//! destinations and stored on the piece by the game session.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::board::piece::{PendingEnPassant, Piece};
use crate::board::square::Square;
use crate::game_state::chess_types::{PieceId, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destinations for one piece, plus any en-passant captures among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub destinations: BTreeSet<Square>,
    pub en_passant: PendingEnPassant,
}

impl LegalMoves {
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.destinations.iter()
    }
}

pub fn generate_legal_moves(board: &Board, piece: &Piece, game_state: &GameState) -> LegalMoves {
    let mut out = LegalMoves::default();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, piece, game_state, &mut out),
        PieceKind::Rook => generate_rook_moves(board, piece, &mut out.destinations),
        PieceKind::Knight => generate_knight_moves(board, piece, &mut out.destinations),
        PieceKind::Bishop => generate_bishop_moves(board, piece, &mut out.destinations),
        PieceKind::Queen => generate_queen_moves(board, piece, &mut out.destinations),
        PieceKind::King => generate_king_moves(board, piece, &mut out.destinations),
    }
    out
}

/// Same as `generate_legal_moves`, empty when `id` is not a live piece.
pub fn generate_legal_moves_for(board: &Board, id: PieceId, game_state: &GameState) -> LegalMoves {
    board
        .piece(id)
        .map(|piece| generate_legal_moves(board, piece, game_state))
        .unwrap_or_default()
}

/// Number of (piece, destination) pairs available to the side to move.
pub fn count_moves_for_side(board: &Board, game_state: &GameState) -> usize {
    board
        .pieces_of(game_state.turn)
        .map(|piece| generate_legal_moves(board, piece, game_state).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn twenty_moves_from_the_starting_position() {
        let (board, turn) = parse_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        let state = GameState {
            turn,
            ..GameState::default()
        };
        assert_eq!(count_moves_for_side(&board, &state), 20);
        let black = GameState {
            turn: Color::Black,
            ..GameState::default()
        };
        assert_eq!(count_moves_for_side(&board, &black), 20);
    }

    #[test]
    fn generation_is_idempotent() {
        let (board, _) = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w")
            .expect("test FEN should parse");
        let state = GameState::default();
        for piece in board.live_pieces() {
            let first = generate_legal_moves(&board, piece, &state);
            let second = generate_legal_moves(&board, piece, &state);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn no_piece_ever_targets_its_own_square_or_a_friend() {
        let (board, _) = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w")
            .expect("test FEN should parse");
        let state = GameState::default();
        for piece in board.live_pieces() {
            let moves = generate_legal_moves(&board, piece, &state);
            assert!(!moves.contains(piece.square));
            for target in moves.iter() {
                assert!(board
                    .occupant(*target)
                    .map_or(true, |occupant| occupant.color != piece.color));
            }
            if matches!(piece.kind, PieceKind::Knight | PieceKind::King) {
                assert!(moves.len() <= 8);
            }
        }
    }

    #[test]
    fn sliding_rays_never_pass_an_occupied_square() {
        let (board, _) = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w")
            .expect("test FEN should parse");
        let state = GameState::default();
        for piece in board.live_pieces().filter(|p| p.kind.is_sliding()) {
            let moves = generate_legal_moves(&board, piece, &state);
            for target in moves.iter() {
                let d_file = (target.file() - piece.square.file()).signum();
                let d_rank = (target.rank() - piece.square.rank()).signum();
                let mut step = piece.square.offset(d_file, d_rank);
                while let Some(between) = step {
                    if between == *target {
                        break;
                    }
                    assert!(board.is_empty(between), "{} jumped {}", piece.square, between);
                    step = between.offset(d_file, d_rank);
                }
            }
        }
    }

    #[test]
    fn unknown_piece_id_has_no_moves() {
        let board = Board::new_standard();
        let moves = generate_legal_moves_for(&board, PieceId(999), &GameState::default());
        assert!(moves.is_empty());
        let e2 = board
            .occupant_id(algebraic_to_square("e2").expect("square"))
            .expect("pawn on e2");
        assert_eq!(generate_legal_moves_for(&board, e2, &GameState::default()).len(), 2);
    }
}
