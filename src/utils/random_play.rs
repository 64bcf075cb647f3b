//! Random playouts through the public game API.
//!
//! Picks uniformly among every legal (piece, destination) pair of the side to
//! move. Seeded playouts are reproducible, which the benches and the
//! invariant tests rely on.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::chess_game::ChessGame;
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{Color, PieceId};

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub verbose: bool,
    pub rules: RuleSet,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: 1,
            verbose: false,
            rules: RuleSet::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfPlayEnd {
    KingCaptured { winner: Color },
    /// The side to move had nothing to play.
    NoLegalMoves(Color),
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct SelfPlayOutcome {
    pub end: SelfPlayEnd,
    pub plies: u16,
    pub game: ChessGame,
}

/// Every legal (piece, destination) pair for the side to move, in roster then
/// square order.
pub fn legal_moves_for_side(game: &ChessGame) -> Vec<(PieceId, Square)> {
    let turn = game.current_turn();
    game.board()
        .pieces_of(turn)
        .flat_map(|piece| {
            game.peek_legal_moves(piece.id)
                .destinations
                .into_iter()
                .map(move |destination| (piece.id, destination))
        })
        .collect()
}

pub fn choose_random_move<R: Rng + ?Sized>(
    game: &ChessGame,
    rng: &mut R,
) -> Option<(PieceId, Square)> {
    legal_moves_for_side(game).choose(rng).copied()
}

/// Start a fresh game and play random moves for both sides until a king
/// falls, a side is stuck, or `max_plies` is reached.
pub fn play_random_game(config: &SelfPlayConfig) -> Result<SelfPlayOutcome, ChessErrors> {
    let mut game = ChessGame::with_rules(config.rules);
    game.start_game()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut plies = 0u16;
    while plies < config.max_plies {
        let Some((id, destination)) = choose_random_move(&game, &mut rng) else {
            let stuck = game.current_turn();
            if config.verbose {
                println!("info string {stuck} has no legal moves after {plies} plies");
            }
            return Ok(SelfPlayOutcome {
                end: SelfPlayEnd::NoLegalMoves(stuck),
                plies,
                game,
            });
        };

        let result = game.attempt_move(id, destination);
        if !result.applied {
            break;
        }
        plies += 1;

        if config.verbose {
            if let Some(record) = game.history().last() {
                println!("info string ply {plies} {} {}", record.color, record.to_long_algebraic());
            }
        }

        if let Some(winner) = result.winner {
            if config.verbose {
                println!("info string {winner} captured the king");
            }
            return Ok(SelfPlayOutcome {
                end: SelfPlayEnd::KingCaptured { winner },
                plies,
                game,
            });
        }
    }

    Ok(SelfPlayOutcome {
        end: SelfPlayEnd::MaxPlies,
        plies,
        game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Phase;

    #[test]
    fn twenty_moves_are_available_at_the_start() {
        let mut game = ChessGame::new();
        game.start_game().expect("menu -> playing");
        assert_eq!(legal_moves_for_side(&game).len(), 20);
    }

    #[test]
    fn random_moves_keep_the_board_consistent_and_alternate_turns() {
        for seed in 0..12u64 {
            let mut game = ChessGame::new();
            game.start_game().expect("menu -> playing");
            let mut rng = StdRng::seed_from_u64(seed);

            for ply in 0..200u32 {
                if game.phase() == Phase::GameOver {
                    break;
                }
                let mover = game.current_turn();
                let Some((id, destination)) = choose_random_move(&game, &mut rng) else {
                    break;
                };
                let result = game.attempt_move(id, destination);
                assert!(result.applied, "seed {seed} ply {ply}: {:?}", result.rejection);
                assert!(game.board().occupancy_is_consistent(), "seed {seed} ply {ply}");
                assert_eq!(game.current_turn(), mover.opposite());
                assert_eq!(game.move_count(), ply + 1);
                assert_eq!(game.history().len() as u32, ply + 1);
                assert!(game.board().piece_count() <= 32);
            }
        }
    }

    #[test]
    fn seeded_playouts_repeat_exactly() {
        let config = SelfPlayConfig {
            max_plies: 120,
            seed: 42,
            ..SelfPlayConfig::default()
        };
        let first = play_random_game(&config).expect("playout");
        let second = play_random_game(&config).expect("playout");
        assert_eq!(first.end, second.end);
        assert_eq!(first.plies, second.plies);
        assert_eq!(first.game.history(), second.game.history());
        assert_eq!(first.game.get_fen(), second.game.get_fen());
    }

    #[test]
    fn playout_ends_for_a_reason_it_reports() {
        let outcome = play_random_game(&SelfPlayConfig {
            max_plies: 600,
            seed: 7,
            ..SelfPlayConfig::default()
        })
        .expect("playout");
        match outcome.end {
            SelfPlayEnd::KingCaptured { winner } => {
                assert_eq!(outcome.game.phase(), Phase::GameOver);
                assert_eq!(outcome.game.winner(), Some(winner));
                assert!(outcome.game.board().king_of(winner.opposite()).is_none());
            }
            SelfPlayEnd::NoLegalMoves(color) => {
                assert_eq!(outcome.game.current_turn(), color);
                assert!(legal_moves_for_side(&outcome.game).is_empty());
            }
            SelfPlayEnd::MaxPlies => assert_eq!(outcome.plies, 600),
        }
        assert_eq!(outcome.game.history().len(), usize::from(outcome.plies));
    }

    #[test]
    fn zero_ply_budget_returns_the_starting_game() {
        let outcome = play_random_game(&SelfPlayConfig {
            max_plies: 0,
            ..SelfPlayConfig::default()
        })
        .expect("playout");
        assert_eq!(outcome.end, SelfPlayEnd::MaxPlies);
        assert_eq!(outcome.game.move_count(), 0);
        assert_eq!(outcome.game.phase(), Phase::Playing);
    }
}
