//! Move history and PGN-style game records.
//!
//! Moves are written in long algebraic form (`e2e4`, `e7e8q`). The record
//! headers follow PGN; the result reflects capture-the-king outcomes.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::board::square::Square;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, PieceKind};

/// One applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Move count after this move was applied.
    pub move_number: u32,
    pub color: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub en_passant: bool,
    pub promoted: bool,
}

impl MoveRecord {
    pub fn to_long_algebraic(&self) -> String {
        let mut lan = format!("{}{}", self.from, self.to);
        if self.promoted {
            lan.push(PieceKind::Queen.letter());
        }
        lan
    }
}

/// PGN result token for a finished or unfinished game.
pub fn result_token(winner: Option<Color>) -> &'static str {
    match winner {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

/// Numbered movetext, for example `1. e2e4 e7e5 2. g1f3`. A record that
/// opens with Black starts as `1... e7e5`.
pub fn write_move_list(records: &[MoveRecord]) -> String {
    let black_first = records.first().is_some_and(|r| r.color == Color::Black);
    let mut parts = Vec::<String>::with_capacity(records.len() + records.len() / 2 + 1);
    for (i, record) in records.iter().enumerate() {
        let number = (i + usize::from(black_first)) / 2 + 1;
        match record.color {
            Color::White => parts.push(format!("{number}.")),
            Color::Black if i == 0 => parts.push(format!("{number}...")),
            Color::Black => {}
        }
        parts.push(record.to_long_algebraic());
    }
    parts.join(" ")
}

/// Whether `fen` describes the standard starting position with White to move.
/// Castling and clock fields are not compared.
pub fn is_standard_start(fen: &str) -> bool {
    fn key(fen: &str) -> (Option<&str>, Option<&str>, &str) {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        (
            fields.first().copied(),
            fields.get(1).copied(),
            fields.get(3).copied().unwrap_or("-"),
        )
    }
    key(fen) == key(STARTING_POSITION_FEN)
}

/// PGN-style record. `initial_fen` is the position the game started from;
/// `SetUp` and `FEN` headers are written when it is not the standard start.
pub fn write_game_record(
    records: &[MoveRecord],
    winner: Option<Color>,
    initial_fen: &str,
    date: NaiveDate,
) -> String {
    let result = result_token(winner);
    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Capture Chess Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("Round", "-".to_owned());
    headers.insert("White", "White".to_owned());
    headers.insert("Black", "Black".to_owned());
    headers.insert("Result", result.to_owned());
    if !is_standard_start(initial_fen) {
        headers.insert("SetUp", "1".to_owned());
        headers.insert("FEN", initial_fen.to_owned());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    let movetext = write_move_list(records);
    if movetext.is_empty() {
        out.push_str(result);
    } else {
        out.push_str(&format!("{movetext} {result}"));
    }
    out.push('\n');
    out
}

/// `write_game_record` stamped with today's local date.
pub fn write_game_record_today(
    records: &[MoveRecord],
    winner: Option<Color>,
    initial_fen: &str,
) -> String {
    write_game_record(records, winner, initial_fen, Local::now().date_naive())
}
