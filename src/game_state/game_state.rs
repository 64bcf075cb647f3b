//! Turn, move clock and lifecycle phase of a game session.
//!
//! `GameState` is owned by a `ChessGame` and handed by reference to the move
//! generator (which reads the move clock for en-passant expiry) and by mutable
//! reference to the move executor (which advances it).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{Color, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Side to move.
    pub turn: Color,
    /// Number of moves applied so far. Advanced once per applied move, and used
    /// as the logical clock for en-passant expiry.
    pub move_count: u32,
    pub phase: Phase,
    /// Set when a king is captured.
    pub winner: Option<Color>,
    pub rules: RuleSet,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn: Color::White,
            move_count: 0,
            phase: Phase::MainMenu,
            winner: None,
            rules: RuleSet::default(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[inline]
    pub fn accepts_moves(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Move to `next`, or refuse when the phase machine has no such edge.
    ///
    /// Allowed: MainMenu -> Playing, Playing <-> Paused, Playing/Paused ->
    /// GameOver, and any phase back to MainMenu.
    pub fn change_phase(&mut self, next: Phase) -> Result<(), ChessErrors> {
        let allowed = matches!(
            (self.phase, next),
            (Phase::MainMenu, Phase::Playing)
                | (Phase::Playing, Phase::Paused)
                | (Phase::Paused, Phase::Playing)
                | (Phase::Playing, Phase::GameOver)
                | (Phase::Paused, Phase::GameOver)
                | (Phase::Playing, Phase::MainMenu)
                | (Phase::Paused, Phase::MainMenu)
                | (Phase::GameOver, Phase::MainMenu)
        );
        if !allowed {
            return Err(ChessErrors::InvalidPhaseTransition((self.phase, next)));
        }
        self.phase = next;
        Ok(())
    }

    /// Advance the move clock and hand the move to the other side.
    pub fn advance_turn(&mut self) {
        self.move_count += 1;
        self.turn = self.turn.opposite();
    }

    /// Record the loss of `color`'s king and end the game.
    pub fn king_captured(&mut self, color: Color) {
        self.winner = Some(color.opposite());
        self.phase = Phase::GameOver;
    }
}
