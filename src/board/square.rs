//! Board coordinates.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::square_to_algebraic;

/// One cell of the 8x8 grid. `file` runs a..h as 0..7, `rank` runs 1..8 as 0..7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// `None` when either coordinate falls outside `0..=7`.
    #[inline]
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        if (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        Self::new(file, rank).ok_or(ChessErrors::InvalidFileOrRank((file, rank)))
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Row-major index, `a1 == 0`, `h8 == 63`.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank * BOARD_SIZE + self.file) as usize
    }

    /// The square `(d_file, d_rank)` away, if it is still on the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::new(self.file.checked_add(d_file)?, self.rank.checked_add(d_rank)?)
    }

    /// All 64 squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_outside_the_board_do_not_exist() {
        for bad in [-1, 8, 9, i8::MIN, i8::MAX] {
            for good in 0..8 {
                assert!(Square::new(bad, good).is_none());
                assert!(Square::new(good, bad).is_none());
            }
        }
        assert!(Square::new(-1, -1).is_none());
        assert!(Square::new(8, 8).is_none());
        assert_eq!(
            Square::from_file_rank(8, 0),
            Err(ChessErrors::InvalidFileOrRank((8, 0)))
        );
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let h4 = Square::new(7, 3).expect("h4");
        assert!(h4.offset(1, 0).is_none());
        assert_eq!(h4.offset(-1, 1), Square::new(6, 4));
        let a1 = Square::new(0, 0).expect("a1");
        assert!(a1.offset(0, -1).is_none());
        assert!(a1.offset(-2, 1).is_none());
        let h1 = Square::new(7, 0).expect("h1");
        assert!(h1.offset(i8::MAX, 0).is_none());
        assert!(h1.offset(0, i8::MIN).is_none());
        assert!(a1.offset(i8::MIN, i8::MAX).is_none());
    }

    #[test]
    fn all_squares_are_unique_and_indexed_in_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        for (i, square) in squares.iter().enumerate() {
            assert_eq!(square.index(), i);
        }
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[63].to_string(), "h8");
    }
}
