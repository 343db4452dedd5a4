//! The play / replay loop.
//!
//! A session drives one [`GameEngine`] from a line-oriented reader and
//! writes everything the players see to a writer. When a game ends it asks
//! whether to play again and, on a "no", returns to its caller with a
//! summary instead of ending the process.

use crate::config::HostConfig;
use crate::input::{Command, ReplayChoice, parse_command, parse_replay};
use crate::render::{render_board, render_move, render_status};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tictactoe_engine::{GameEngine, GameStatus, MoveResult, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Tally of finished games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Games that reached a win or draw.
    games_played: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
        }
        self.games_played += 1;
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} game(s): X won {}, O won {}, {} draw(s)",
            self.games_played, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// What the loop should do after a game ends.
enum Next {
    Continue,
    Stop,
}

/// Interactive session over a reader and a writer.
pub struct Session<R, W> {
    engine: GameEngine,
    config: HostConfig,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh engine.
    pub fn new(config: HostConfig, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    /// Runs games until the players quit, decline a replay, or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    #[instrument(skip(self))]
    pub fn run(mut self) -> io::Result<SessionSummary> {
        info!("Session started");
        self.show_board()?;

        loop {
            let player = self.engine.current_player();
            write!(
                self.output,
                "{} ({}) to move [row col]: ",
                self.config.name_of(player),
                player
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                break;
            };

            let (row, col) = match parse_command(&line) {
                Command::Move { row, col } => (row, col),
                Command::Quit => {
                    info!("Players quit mid-game");
                    break;
                }
                Command::Unrecognized(text) => {
                    writeln!(
                        self.output,
                        "Could not read {:?}. Enter a row and column (0-2), a number 1-9, or q.",
                        text
                    )?;
                    continue;
                }
            };

            match self.engine.attempt_move(row, col) {
                Err(e) => {
                    warn!(error = %e, "Move off the board");
                    writeln!(
                        self.output,
                        "({}, {}) is off the board. Rows and columns run 0-2.",
                        row, col
                    )?;
                }
                Ok(MoveResult::Rejected(reason)) => {
                    writeln!(self.output, "{}. Try again.", reason)?;
                }
                Ok(MoveResult::Accepted { status, player }) => {
                    if let Ok(position) = Position::new(row, col) {
                        writeln!(self.output, "{}", render_move(player, position, &self.config))?;
                    }
                    self.show_board()?;
                    if status.is_over() {
                        if let Next::Stop = self.finish_game(status)? {
                            break;
                        }
                    }
                }
            }
        }

        writeln!(self.output, "{}", self.summary)?;
        info!(summary = %self.summary, "Session finished");
        Ok(self.summary)
    }

    fn finish_game(&mut self, status: GameStatus) -> io::Result<Next> {
        self.summary.record(status);
        let announcement = render_status(status, &self.config);

        if !*self.config.offer_replay() {
            writeln!(self.output, "{}", announcement)?;
            return Ok(Next::Stop);
        }

        loop {
            write!(self.output, "{} Play again? [y/n]: ", announcement)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Next::Stop);
            };

            match parse_replay(&line) {
                Some(ReplayChoice::PlayAgain) => {
                    self.engine.reset();
                    self.show_board()?;
                    return Ok(Next::Continue);
                }
                Some(ReplayChoice::Exit) => return Ok(Next::Stop),
                None => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        let snapshot = self.engine.current_state();
        writeln!(
            self.output,
            "\n{}\n",
            render_board(snapshot.board(), *self.config.empty_glyph())
        )
    }

    /// Reads one line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
