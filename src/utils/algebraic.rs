//! Square conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values, reused by FEN parsing, move records and the console.

use crate::board::square::Square;
use crate::chess_errors::ChessErrors;

/// Convert long algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Square::from_file_rank((file - b'a') as i8, (rank - b'1') as i8)
}

/// Convert a square to long algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file() as u8);
    let rank_char = char::from(b'1' + square.rank() as u8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!((a1.file(), a1.rank()), (0, 0));
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((h8.file(), h8.rank()), (7, 7));
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(h8), "h8");
    }

    #[test]
    fn uppercase_file_is_accepted() {
        assert_eq!(
            algebraic_to_square("E4").expect("E4 should parse"),
            algebraic_to_square("e4").expect("e4 should parse")
        );
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned()))
            );
        }
    }
}
