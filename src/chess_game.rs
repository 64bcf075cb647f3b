//! Game session: the API a presentation layer drives.
//!
//! `ChessGame` owns the board, the game state and the move history. Callers
//! query legal destinations, submit moves and steer the lifecycle; they never
//! mutate the board themselves. A move is applied to a copy of the board and
//! state and committed only when the executor succeeds, so a rejected move
//! leaves everything as it was.

use std::collections::BTreeSet;
use std::fmt;

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{Color, Phase, PieceId};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, MoveRejection, MoveResult};
use crate::move_generation::legal_move_generator::{generate_legal_moves_for, LegalMoves};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::move_record::{write_game_record_today, MoveRecord};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    state: GameState,
    history: Vec<MoveRecord>,
    initial_fen: String,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard layout, waiting in the main menu.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        let board = Board::new_standard();
        let state = GameState::new(rules);
        let initial_fen = generate_fen(&board, &state);
        Self {
            board,
            state,
            history: Vec::new(),
            initial_fen,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::from_fen_with_rules(fen, RuleSet::default())
    }

    pub fn from_fen_with_rules(fen: &str, rules: RuleSet) -> Result<Self, ChessErrors> {
        let (board, turn) = parse_fen(fen)?;
        let state = GameState {
            turn,
            ..GameState::new(rules)
        };
        let initial_fen = generate_fen(&board, &state);
        Ok(Self {
            board,
            state,
            history: Vec::new(),
            initial_fen,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.state.turn
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.occupant(square)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(&self.board, &self.state)
    }

    /// FEN of the position this game started from.
    #[inline]
    pub fn initial_fen(&self) -> &str {
        &self.initial_fen
    }

    /// PGN-style record of the game so far, dated today.
    pub fn game_record(&self) -> String {
        write_game_record_today(&self.history, self.state.winner, &self.initial_fen)
    }

    pub fn start_game(&mut self) -> Result<(), ChessErrors> {
        self.state.change_phase(Phase::Playing)
    }

    pub fn pause(&mut self) -> Result<(), ChessErrors> {
        self.state.change_phase(Phase::Paused)
    }

    pub fn resume(&mut self) -> Result<(), ChessErrors> {
        self.state.change_phase(Phase::Playing)
    }

    /// Fresh standard layout back in the main menu, keeping the rule set.
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.state.rules);
    }

    /// Legal destinations for `id`, empty unless the game is being played.
    ///
    /// Also refreshes the en-passant captures recorded on the piece, which the
    /// executor consumes when one of them is chosen.
    pub fn legal_moves(&mut self, id: PieceId) -> BTreeSet<Square> {
        if !self.state.accepts_moves() {
            return BTreeSet::new();
        }
        let legal = generate_legal_moves_for(&self.board, id, &self.state);
        if let Ok(piece) = self.board.piece_mut(id) {
            piece.pending_en_passant = legal.en_passant;
        }
        legal.destinations
    }

    /// Legal destinations of the piece on `square`.
    pub fn legal_moves_from(&mut self, square: Square) -> BTreeSet<Square> {
        match self.board.occupant_id(square) {
            Some(id) => self.legal_moves(id),
            None => BTreeSet::new(),
        }
    }

    /// Pure generation for `id`, regardless of phase.
    pub fn peek_legal_moves(&self, id: PieceId) -> LegalMoves {
        generate_legal_moves_for(&self.board, id, &self.state)
    }

    /// Move `id` to `destination` if that is one of its legal destinations.
    pub fn attempt_move(&mut self, id: PieceId, destination: Square) -> MoveResult {
        if !self.state.accepts_moves() {
            return MoveResult::rejected(MoveRejection::NotPlaying(self.state.phase));
        }
        let Some(piece) = self.board.piece(id) else {
            return MoveResult::rejected(MoveRejection::NoSuchPiece);
        };
        if piece.color != self.state.turn {
            return MoveResult::rejected(MoveRejection::NotYourTurn);
        }
        let (color, kind, from) = (piece.color, piece.kind, piece.square);

        if !self.legal_moves(id).contains(&destination) {
            return MoveResult::rejected(MoveRejection::IllegalDestination);
        }

        let mut board = self.board.clone();
        let mut state = self.state.clone();
        match apply_move(&mut board, &mut state, id, destination) {
            Ok(result) => {
                self.board = board;
                self.state = state;
                self.history.push(MoveRecord {
                    move_number: self.state.move_count,
                    color,
                    kind,
                    from,
                    to: destination,
                    captured: result.captured.as_ref().map(|p| p.kind),
                    en_passant: result.en_passant,
                    promoted: result.promoted,
                });
                result
            }
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("move executor broke the board invariant: {err}");
                }
                MoveResult::rejected(MoveRejection::InvariantViolation)
            }
        }
    }

    /// `attempt_move` for whatever stands on `from`.
    pub fn attempt_move_between(&mut self, from: Square, to: Square) -> MoveResult {
        match self.board.occupant_id(from) {
            Some(id) => self.attempt_move(id, to),
            None if !self.state.accepts_moves() => {
                MoveResult::rejected(MoveRejection::NotPlaying(self.state.phase))
            }
            None => MoveResult::rejected(MoveRejection::NoSuchPiece),
        }
    }
}

impl fmt::Display for ChessGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(&self.board))
    }
}
