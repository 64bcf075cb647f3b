//! FEN position parsing.
//!
//! Accepts the placement and side-to-move fields, optionally followed by the
//! castling field (validated, then ignored since castling is not played), the
//! en-passant target and the two clocks (ignored). A pawn away from its home
//! rank loads as already moved. An en-passant target marks the pawn that just
//! passed it as vulnerable at move count 0, the clock a loaded game starts on.

use crate::board::board::Board;
use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<(Board, Color), ChessErrors> {
    let malformed = || ChessErrors::InvalidFENstringForm(fen.to_owned());
    let mut fields = fen.split_whitespace();

    let mut board = parse_placement(fields.next().ok_or_else(malformed)?)?;

    let turn = match fields.next() {
        Some("w") => Color::White,
        Some("b") => Color::Black,
        _ => return Err(malformed()),
    };

    if let Some(castling) = fields.next() {
        if castling.is_empty() || !castling.chars().all(|c| "KQkq-".contains(c)) {
            return Err(malformed());
        }
    }

    if let Some(en_passant) = fields.next() {
        mark_en_passant(&mut board, turn, en_passant).map_err(|_| malformed())?;
    }

    for clock in fields.by_ref().take(2) {
        if clock.parse::<u32>().is_err() {
            return Err(malformed());
        }
    }
    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok((board, turn))
}

fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let malformed = || ChessErrors::InvalidFENstringForm(placement.to_owned());
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(malformed());
    }

    let mut board = Board::new_empty();
    for (i, row) in rows.iter().enumerate() {
        let rank = BOARD_SIZE - 1 - i as i8;
        let mut file = 0i8;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(ChessErrors::InvalidFENtoken(c));
                }
                file = file
                    .checked_add(skip as i8)
                    .filter(|&file| file <= BOARD_SIZE)
                    .ok_or_else(malformed)?;
                continue;
            }
            let kind = PieceKind::from_letter(c).ok_or(ChessErrors::InvalidFENtoken(c))?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new(file, rank).ok_or_else(malformed)?;
            let id = board.add_piece(color, kind, square)?;
            if kind == PieceKind::Pawn && rank != color.pawn_home_rank() {
                board.piece_mut(id)?.is_first_move = false;
            }
            file += 1;
        }
        if file != BOARD_SIZE {
            return Err(malformed());
        }
    }

    Ok(board)
}

fn mark_en_passant(board: &mut Board, turn: Color, field: &str) -> Result<(), ChessErrors> {
    if field == "-" {
        return Ok(());
    }
    let target = algebraic_to_square(field)?;
    let passed = target
        .offset(0, -turn.pawn_direction())
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(field.to_owned()))?;
    let victim = board
        .occupant(passed)
        .filter(|p| p.kind == PieceKind::Pawn && p.color == turn.opposite())
        .map(|p| p.id)
        .ok_or(ChessErrors::TryToViewOrEditEmptySquare(passed))?;

    let pawn = board.piece_mut(victim)?;
    pawn.is_first_move = false;
    pawn.is_en_passant_vulnerable = true;
    pawn.en_passant_eligible_move = 0;
    Ok(())
}
