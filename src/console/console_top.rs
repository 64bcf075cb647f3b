//! Line-oriented console front-end.
//!
//! Reads one command per line, drives a `ChessGame` through its public API
//! and writes plain-text replies. Unknown input is answered with a hint
//! rather than an error so the loop keeps running.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::square::Square;
use crate::chess_game::ChessGame;
use crate::game_state::chess_types::Phase;
use crate::move_generation::legal_move_apply::{MoveRejection, MoveResult};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::move_record::write_move_list;
use crate::utils::random_play::{choose_random_move, play_random_game, SelfPlayConfig};

const HELP_TEXT: &str = "\
commands:
  start | pause | resume | reset | new
  board                 show the position
  moves <square>        legal destinations of the piece on <square>
  <from><to>            move, for example e2e4
  random                play a random legal move
  selfplay [seed]       play a whole random game from the start
  history | pgn | fen
  position <fen>        load a position (back to the menu)
  debug on|off
  quit";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new();

    writeln!(stdout, "capture chess, type 'help' for commands")?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game: ChessGame,
    rng: StdRng,
    debug_mode: bool,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            game: ChessGame::new(),
            rng: StdRng::from_rng(&mut rand::rng()),
            debug_mode: false,
        }
    }

    /// Deterministic `random` replies, for scripted sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    /// Handle one line of input. Returns `Ok(true)` when the loop should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "start" => {
                if let Err(err) = self.game.start_game() {
                    writeln!(out, "error: {err}")?;
                } else {
                    writeln!(out, "{} to move", self.game.current_turn())?;
                }
            }
            "pause" => {
                if let Err(err) = self.game.pause() {
                    writeln!(out, "error: {err}")?;
                } else {
                    writeln!(out, "paused")?;
                }
            }
            "resume" => {
                if let Err(err) = self.game.resume() {
                    writeln!(out, "error: {err}")?;
                } else {
                    writeln!(out, "{} to move", self.game.current_turn())?;
                }
            }
            "reset" => {
                self.game.reset();
                writeln!(out, "back to the main menu")?;
            }
            "new" => {
                self.game.reset();
                if let Err(err) = self.game.start_game() {
                    writeln!(out, "error: {err}")?;
                } else {
                    writeln!(out, "new game, White to move")?;
                }
            }
            "board" => write!(out, "{}", self.game)?,
            "moves" => match parts.next().map(algebraic_to_square) {
                Some(Ok(square)) => self.write_moves(square, out)?,
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "usage: moves <square>")?,
            },
            "random" => {
                match choose_random_move(&self.game, &mut self.rng) {
                    Some((id, destination)) if self.game.phase() == Phase::Playing => {
                        let result = self.game.attempt_move(id, destination);
                        self.write_move_result(&result, out)?;
                    }
                    _ => writeln!(out, "no move to play")?,
                }
            }
            "selfplay" => {
                let seed = match parts.next().map(str::parse::<u64>) {
                    Some(Ok(seed)) => seed,
                    Some(Err(_)) => {
                        writeln!(out, "usage: selfplay [seed]")?;
                        return Ok(false);
                    }
                    None => SelfPlayConfig::default().seed,
                };
                let config = SelfPlayConfig {
                    seed,
                    rules: self.game.state().rules,
                    verbose: self.debug_mode,
                    ..SelfPlayConfig::default()
                };
                match play_random_game(&config) {
                    Ok(outcome) => {
                        writeln!(out, "{}", write_move_list(outcome.game.history()))?;
                        writeln!(out, "ended after {} plies: {:?}", outcome.plies, outcome.end)?;
                        self.game = outcome.game;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "history" => {
                if self.game.history().is_empty() {
                    writeln!(out, "no moves yet")?;
                } else {
                    writeln!(out, "{}", write_move_list(self.game.history()))?;
                }
            }
            "pgn" => write!(out, "{}", self.game.game_record())?,
            "fen" => writeln!(out, "{}", self.game.get_fen())?,
            "position" => {
                let fen = parts.collect::<Vec<_>>().join(" ");
                match ChessGame::from_fen_with_rules(&fen, self.game.state().rules) {
                    Ok(game) => {
                        self.game = game;
                        writeln!(out, "position loaded, type 'start' to play")?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "debug" => match parts.next() {
                Some(mode) if mode.eq_ignore_ascii_case("on") => {
                    self.debug_mode = true;
                    writeln!(out, "debug on")?;
                }
                Some(mode) if mode.eq_ignore_ascii_case("off") => {
                    self.debug_mode = false;
                    writeln!(out, "debug off")?;
                }
                _ => writeln!(out, "usage: debug on|off")?,
            },
            "quit" | "exit" => {
                return Ok(true);
            }
            _ => match parse_move_text(cmd) {
                Some((from, to)) => {
                    let result = self.game.attempt_move_between(from, to);
                    self.write_move_result(&result, out)?;
                }
                None => writeln!(out, "unknown command '{cmd}', type 'help'")?,
            },
        }

        Ok(false)
    }

    fn write_moves(&mut self, square: Square, out: &mut impl Write) -> io::Result<()> {
        let Some(piece) = self.game.piece_at(square) else {
            return writeln!(out, "{square} is empty");
        };
        let (color, kind) = (piece.color, piece.kind);
        let destinations = self.game.legal_moves_from(square);
        let names: Vec<String> = destinations.iter().map(Square::to_string).collect();
        if self.debug_mode {
            writeln!(out, "info string {color} {kind:?} on {square}")?;
        }
        if names.is_empty() {
            writeln!(out, "no legal moves")
        } else {
            writeln!(out, "{}", names.join(" "))
        }
    }

    fn write_move_result(&self, result: &MoveResult, out: &mut impl Write) -> io::Result<()> {
        let Some(rejection) = result.rejection else {
            if let Some(record) = self.game.history().last() {
                writeln!(out, "{} {}", record.color, record.to_long_algebraic())?;
            }
            if self.debug_mode {
                writeln!(out, "info string fen {}", self.game.get_fen())?;
            }
            if let Some(captured) = &result.captured {
                let how = if result.en_passant { " en passant" } else { "" };
                writeln!(out, "captured {} {:?}{how}", captured.color, captured.kind)?;
            }
            if result.promoted {
                writeln!(out, "promoted to a queen")?;
            }
            if let Some(winner) = result.winner {
                writeln!(out, "game over, {winner} wins")?;
            }
            return Ok(());
        };

        let reason = match rejection {
            MoveRejection::NotPlaying(Phase::MainMenu) => "the game has not started".to_owned(),
            MoveRejection::NotPlaying(phase) => format!("no moves while {phase:?}"),
            MoveRejection::NoSuchPiece => "no piece there".to_owned(),
            MoveRejection::NotYourTurn => format!("it is {}'s turn", self.game.current_turn()),
            MoveRejection::IllegalDestination => "illegal destination".to_owned(),
            MoveRejection::InvariantViolation => "move could not be applied".to_owned(),
        };
        writeln!(out, "rejected: {reason}")
    }
}

/// `e2e4` style input, case-insensitive.
fn parse_move_text(text: &str) -> Option<(Square, Square)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let from = algebraic_to_square(&text[0..2]).ok()?;
    let to = algebraic_to_square(&text[2..4]).ok()?;
    Some((from, to))
}
