//! Move execution: the single place where occupancy changes during play.
//!
//! `apply_move` trusts that `destination` came out of a fresh generation for
//! the moving piece. It performs the capture, relocation, clock advance and
//! the pawn follow-ups (en-passant vulnerability, en-passant removal,
//! promotion), and ends the game when a king is taken.

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Phase, PieceId, PieceKind};
use crate::game_state::game_state::GameState;

/// Why a move attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Moves are only accepted while playing.
    NotPlaying(Phase),
    NoSuchPiece,
    NotYourTurn,
    IllegalDestination,
    /// The board refused the mutation; the position was left untouched.
    InvariantViolation,
}

/// Outcome of a move attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub applied: bool,
    /// The piece taken by this move, including a pawn taken en passant.
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub promoted: bool,
    /// Id of the queen that replaced a promoting pawn.
    pub promoted_piece: Option<PieceId>,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub rejection: Option<MoveRejection>,
}

impl MoveResult {
    pub fn rejected(reason: MoveRejection) -> Self {
        Self {
            rejection: Some(reason),
            ..Self::default()
        }
    }
}

pub fn apply_move(
    board: &mut Board,
    game_state: &mut GameState,
    id: PieceId,
    destination: Square,
) -> Result<MoveResult, ChessErrors> {
    let mover = board.piece(id).cloned().ok_or(ChessErrors::NoSuchPiece(id))?;
    let from = mover.square;
    let mut result = MoveResult {
        applied: true,
        ..MoveResult::default()
    };

    // Handle capture
    if let Some(occupant) = board.occupant(destination) {
        if !occupant.is_enemy_of(&mover) {
            return Err(ChessErrors::SquareOccupied((destination, occupant.id)));
        }
        let victim = occupant.id;
        result.captured = Some(board.remove_piece(victim)?);
    }

    // Handle movement
    board.clear_square(from);
    board.place_piece(id, destination)?;
    let moved = board.piece_mut(id)?;
    moved.is_first_move = false;
    let pending = std::mem::take(&mut moved.pending_en_passant);
    game_state.advance_turn();

    if mover.kind == PieceKind::Pawn {
        if mover.is_first_move && (destination.rank() - from.rank()).abs() == 2 {
            let moved = board.piece_mut(id)?;
            moved.is_en_passant_vulnerable = true;
            moved.en_passant_eligible_move = game_state.move_count;
        }

        if let Some(capture) = pending.capture_for(destination) {
            result.captured = Some(board.remove_piece(capture.victim)?);
            result.en_passant = true;
        }

        if destination.rank() == mover.color.promotion_rank() {
            board.remove_piece(id)?;
            let queen = board.add_piece(mover.color, PieceKind::Queen, destination)?;
            result.promoted = true;
            result.promoted_piece = Some(queen);
        }
    }

    if let Some(captured) = &result.captured {
        if captured.kind == PieceKind::King {
            game_state.king_captured(captured.color);
        }
    }
    result.game_over = game_state.phase == Phase::GameOver;
    result.winner = game_state.winner;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves_for;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn setup(fen: &str) -> (Board, GameState) {
        let (board, turn) = parse_fen(fen).expect("test FEN should parse");
        let mut state = GameState {
            turn,
            ..GameState::default()
        };
        state.change_phase(Phase::Playing).expect("menu -> playing");
        (board, state)
    }

    fn id_on(board: &Board, name: &str) -> PieceId {
        board.occupant_id(sq(name)).expect("piece on square")
    }

    #[test]
    fn quiet_move_relocates_and_advances_the_clock() {
        let (mut board, mut state) = setup("8/8/8/8/8/8/8/R3K3 w");
        let rook = id_on(&board, "a1");
        let result = apply_move(&mut board, &mut state, rook, sq("a5")).expect("legal move");
        assert!(result.applied);
        assert!(result.captured.is_none());
        assert!(board.is_empty(sq("a1")));
        assert_eq!(board.occupant_id(sq("a5")), Some(rook));
        assert!(!board.piece(rook).expect("rook").is_first_move);
        assert_eq!((state.turn, state.move_count), (Color::Black, 1));
        assert!(board.occupancy_is_consistent());
    }

    #[test]
    fn capture_removes_the_enemy_before_landing() {
        let (mut board, mut state) = setup("8/8/8/n7/8/8/8/R7 w");
        let rook = id_on(&board, "a1");
        let knight = id_on(&board, "a5");
        let result = apply_move(&mut board, &mut state, rook, sq("a5")).expect("legal capture");
        assert_eq!(result.captured.map(|p| p.id), Some(knight));
        assert!(board.piece(knight).is_none());
        assert_eq!(board.piece_count(), 1);
        assert!(!result.game_over);
        assert!(board.occupancy_is_consistent());
    }

    #[test]
    fn landing_on_a_friend_is_refused() {
        let (mut board, mut state) = setup("8/8/8/N7/8/8/8/R7 w");
        let rook = id_on(&board, "a1");
        let knight = id_on(&board, "a5");
        assert_eq!(
            apply_move(&mut board, &mut state, rook, sq("a5")),
            Err(ChessErrors::SquareOccupied((sq("a5"), knight)))
        );
    }

    #[test]
    fn double_step_stamps_the_clock_after_advancing_it() {
        let (mut board, mut state) = setup("8/8/8/8/8/8/4P3/8 w");
        let pawn = id_on(&board, "e2");
        apply_move(&mut board, &mut state, pawn, sq("e4")).expect("double step");
        let pawn = board.piece(pawn).expect("pawn");
        assert!(pawn.is_en_passant_vulnerable);
        assert_eq!(pawn.en_passant_eligible_move, 1);
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn single_first_step_does_not_make_a_pawn_vulnerable() {
        let (mut board, mut state) = setup("8/8/8/8/8/8/4P3/8 w");
        let pawn = id_on(&board, "e2");
        apply_move(&mut board, &mut state, pawn, sq("e3")).expect("single step");
        assert!(!board.piece(pawn).expect("pawn").is_en_passant_vulnerable);
    }

    #[test]
    fn flagged_en_passant_removes_the_passed_pawn() {
        let (mut board, mut state) = setup("8/8/8/3Pp3/8/8/8/8 w - e6");
        let attacker = id_on(&board, "d5");
        let victim = id_on(&board, "e5");
        let legal = generate_legal_moves_for(&board, attacker, &state);
        board.piece_mut(attacker).expect("attacker").pending_en_passant = legal.en_passant;

        let result = apply_move(&mut board, &mut state, attacker, sq("e6")).expect("en passant");
        assert!(result.en_passant);
        assert_eq!(result.captured.map(|p| p.id), Some(victim));
        assert!(board.is_empty(sq("e5")));
        assert_eq!(board.occupant_id(sq("e6")), Some(attacker));
        assert!(board.piece(attacker).expect("attacker").pending_en_passant.is_empty());
        assert!(board.occupancy_is_consistent());
    }

    #[test]
    fn promotion_swaps_the_pawn_for_a_new_queen() {
        let (mut board, mut state) = setup("8/4P3/8/8/8/8/8/8 w");
        let pawn = id_on(&board, "e7");
        let result = apply_move(&mut board, &mut state, pawn, sq("e8")).expect("promotion");
        assert!(result.promoted);
        let queen_id = result.promoted_piece.expect("queen id");
        assert_ne!(queen_id, pawn);
        assert!(board.piece(pawn).is_none());
        let queen = board.occupant(sq("e8")).expect("queen on e8");
        assert_eq!((queen.id, queen.kind, queen.color), (queen_id, PieceKind::Queen, Color::White));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn black_promotes_on_the_first_rank_even_when_capturing() {
        let (mut board, mut state) = setup("8/8/8/8/8/8/3p4/4R3 b");
        let pawn = id_on(&board, "d2");
        let result = apply_move(&mut board, &mut state, pawn, sq("e1")).expect("capture-promotion");
        assert!(result.promoted);
        assert_eq!(result.captured.map(|p| p.kind), Some(PieceKind::Rook));
        let queen = board.occupant(sq("e1")).expect("queen on e1");
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
    }

    #[test]
    fn taking_the_king_ends_the_game() {
        let (mut board, mut state) = setup("4k3/8/8/8/8/8/8/4R3 w");
        let rook = id_on(&board, "e1");
        let result = apply_move(&mut board, &mut state, rook, sq("e8")).expect("king capture");
        assert!(result.game_over);
        assert_eq!(result.winner, Some(Color::White));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(result.captured.map(|p| p.kind), Some(PieceKind::King));
    }
}
