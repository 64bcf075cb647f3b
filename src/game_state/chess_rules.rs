//! Canonical chess-rule constants and the configurable rule set.

/// Files and ranks per side of the board.
pub const BOARD_SIZE: i8 = 8;

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Orthogonal ray directions, counter-clockwise from east.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal ray directions, counter-clockwise from north east.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// Rule switches that change what the generator offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// When `true`, a pawn double step also needs the square it passes over to
    /// be empty. When `false`, only the destination square is checked and a pawn
    /// may hop over a blocker on its first move.
    pub double_step_requires_clear_path: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            double_step_requires_clear_path: true,
        }
    }
}

impl RuleSet {
    /// Destination-only double step check.
    pub fn lenient_double_step() -> Self {
        Self {
            double_step_requires_clear_path: false,
        }
    }
}
