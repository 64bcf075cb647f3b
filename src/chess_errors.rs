//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by position parsing, board
//! bookkeeping and game lifecycle transitions. Ordinary gameplay outcomes such
//! as an illegal destination are not errors: they are reported through
//! `MoveResult` instead.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidFENtoken`, ...) are
//!   recoverable and suitable for presenting to end users.
//! - Board bookkeeping variants (`SquareOccupied`, `NoSuchPiece`, ...) mean a
//!   caller broke the one-occupant contract. They are fatal in debug builds and
//!   contained (the move is rejected) in release builds.

use std::error::Error;
use std::fmt;

use crate::board::square::Square;
use crate::game_state::chess_types::{Phase, PieceId};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// File or rank indices outside `0..=7`.
    ///
    /// Payload: (file_index, rank_index) zero-based.
    InvalidFileOrRank((i8, i8)),

    /// An algebraic square name (for example `e4`) failed to parse.
    InvalidAlgebraicString(String),

    /// Unexpected character in the placement field of a FEN string.
    InvalidFENtoken(char),

    /// FEN string with malformed structure.
    ///
    /// Payload: the offending string for diagnostics.
    InvalidFENstringForm(String),

    /// Attempted to put a piece on a square another piece already occupies.
    ///
    /// Payload: (square, current occupant).
    SquareOccupied((Square, PieceId)),

    /// Attempted to view or edit a square that holds no piece.
    TryToViewOrEditEmptySquare(Square),

    /// The roster has no live piece with this id.
    NoSuchPiece(PieceId),

    /// Lifecycle transition that the phase machine does not allow.
    InvalidPhaseTransition((Phase, Phase)),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidFileOrRank((file, rank)) => {
                write!(f, "file {file} / rank {rank} is off the board")
            }
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic square: {s}"),
            ChessErrors::InvalidFENtoken(c) => write!(f, "invalid FEN token: {c}"),
            ChessErrors::InvalidFENstringForm(s) => write!(f, "malformed FEN string: {s}"),
            ChessErrors::SquareOccupied((square, occupant)) => {
                write!(f, "{square} is already occupied by piece #{}", occupant.0)
            }
            ChessErrors::TryToViewOrEditEmptySquare(square) => write!(f, "{square} is empty"),
            ChessErrors::NoSuchPiece(id) => write!(f, "no live piece #{}", id.0),
            ChessErrors::InvalidPhaseTransition((from, to)) => {
                write!(f, "cannot change phase from {from:?} to {to:?}")
            }
        }
    }
}

impl Error for ChessErrors {}
