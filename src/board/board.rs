//! Square occupancy and the roster of live pieces.
//!
//! The board answers positional queries for anyone, but every mutator is
//! crate-private: occupancy only changes through position setup and the move
//! executor, which keeps the one-occupant-per-square invariant in one place.

use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceId, PieceKind};

/// Back rank from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    occupancy: [Option<PieceId>; 64],
    // Indexed by `PieceId`; captured pieces leave a `None` behind.
    roster: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            occupancy: [None; 64],
            roster: Vec::with_capacity(32),
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The 32-piece starting layout, White on ranks 0 and 1.
    pub fn new_standard() -> Self {
        let mut board = Self::new_empty();
        for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
            for file in 0..BOARD_SIZE {
                for (rank, kind) in [(back, BACK_RANK[file as usize]), (pawns, PieceKind::Pawn)] {
                    let square = Square::new(file, rank).expect("layout squares are on the board");
                    board
                        .add_piece(color, kind, square)
                        .expect("layout squares are distinct");
                }
            }
        }
        board
    }

    /// `None` for coordinates off the board; there is no wraparound.
    #[inline]
    pub fn square_at(&self, file: i8, rank: i8) -> Option<Square> {
        Square::new(file, rank)
    }

    #[inline]
    pub fn occupant_id(&self, square: Square) -> Option<PieceId> {
        self.occupancy[square.index()]
    }

    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.occupant_id(square).and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy[square.index()].is_none()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.roster.get(id.0).and_then(Option::as_ref)
    }

    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.roster.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.live_pieces().filter(move |piece| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.live_pieces().count()
    }

    pub fn king_of(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|piece| piece.kind == PieceKind::King)
    }

    /// Every live piece sits on a square that points back at it, and no square
    /// points at a missing piece.
    pub fn occupancy_is_consistent(&self) -> bool {
        let pieces_agree = self
            .live_pieces()
            .all(|piece| self.occupant_id(piece.square) == Some(piece.id));
        let squares_agree = Square::all().all(|square| match self.occupant_id(square) {
            Some(id) => self.piece(id).map(|p| p.square) == Some(square),
            None => true,
        });
        pieces_agree && squares_agree
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, ChessErrors> {
        self.roster
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ChessErrors::NoSuchPiece(id))
    }

    /// Create a new piece on an empty square and return its id.
    pub(crate) fn add_piece(
        &mut self,
        color: Color,
        kind: PieceKind,
        square: Square,
    ) -> Result<PieceId, ChessErrors> {
        if let Some(occupant) = self.occupant_id(square) {
            return Err(ChessErrors::SquareOccupied((square, occupant)));
        }
        let id = PieceId(self.roster.len());
        self.roster.push(Some(Piece::new(id, color, kind, square)));
        self.occupancy[square.index()] = Some(id);
        Ok(id)
    }

    /// Put `id` on `square`. The square it came from is left untouched; the
    /// caller clears it.
    pub(crate) fn place_piece(&mut self, id: PieceId, square: Square) -> Result<(), ChessErrors> {
        match self.occupant_id(square) {
            Some(occupant) if occupant != id => {
                return Err(ChessErrors::SquareOccupied((square, occupant)))
            }
            _ => {}
        }
        self.piece_mut(id)?.square = square;
        self.occupancy[square.index()] = Some(id);
        Ok(())
    }

    pub(crate) fn clear_square(&mut self, square: Square) -> Option<PieceId> {
        self.occupancy[square.index()].take()
    }

    /// Take a piece out of the roster and off its square.
    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Result<Piece, ChessErrors> {
        let piece = self
            .roster
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(ChessErrors::NoSuchPiece(id))?;
        if self.occupant_id(piece.square) == Some(id) {
            self.clear_square(piece.square);
        }
        Ok(piece)
    }
}
