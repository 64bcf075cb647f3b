//! Per-piece state: identity, position and the flags special rules depend on.

use crate::board::square::Square;
use crate::game_state::chess_types::{Color, PieceId, PieceKind};

/// An en-passant capture offered by the generator: moving to `target` removes
/// the pawn `victim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantCapture {
    pub target: Square,
    pub victim: PieceId,
}

/// En-passant captures flagged by the most recent generation for a pawn. The
/// left and right neighbours are tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingEnPassant {
    pub left: Option<EnPassantCapture>,
    pub right: Option<EnPassantCapture>,
}

impl PendingEnPassant {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The flagged capture whose target is `destination`, if any.
    pub fn capture_for(&self, destination: Square) -> Option<EnPassantCapture> {
        [self.left, self.right]
            .into_iter()
            .flatten()
            .find(|capture| capture.target == destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
    /// True until this piece completes a move.
    pub is_first_move: bool,
    /// Set once a pawn double-steps and never cleared; the stamp below decides
    /// whether it can still be taken.
    pub is_en_passant_vulnerable: bool,
    /// Move count right after the double step.
    pub en_passant_eligible_move: u32,
    pub pending_en_passant: PendingEnPassant,
}

impl Piece {
    pub fn new(id: PieceId, color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            id,
            color,
            kind,
            square,
            is_first_move: true,
            is_en_passant_vulnerable: false,
            en_passant_eligible_move: 0,
            pending_en_passant: PendingEnPassant::default(),
        }
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Whether this pawn can be taken en passant while the clock reads
    /// `move_count`.
    #[inline]
    pub fn can_be_taken_en_passant(&self, move_count: u32) -> bool {
        self.kind == PieceKind::Pawn
            && self.is_en_passant_vulnerable
            && self.en_passant_eligible_move == move_count
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}
