//! Console - interactive text front end for the engine
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - session loop
//! - Level 2: play_round(), report_outcome(), ask_new_game()
//! - Level 3: read_coordinate(), handle_placement(), draw_ui()
//! - Level 4: line I/O

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use tictactoe_core::{Engine, GameState, PlaceError};

use crate::render::{board_lines, token_symbol};
use crate::summary::GameSummary;

// ============================================================================
// CONFIGURATION (Level 4)
// ============================================================================

#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// Play a single game and exit without asking for another
    #[arg(long)]
    pub once: bool,

    /// Print a JSON summary line after each finished game
    #[arg(long)]
    pub json: bool,
}

/// Console behaviour
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Offer a new game after each finished one
    pub ask_new_game: bool,
    /// Emit `GameSummary` JSON after each finished game
    pub json_summary: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            ask_new_game: true,
            json_summary: false,
        }
    }
}

impl From<&ConsoleArgs> for ConsoleConfig {
    fn from(args: &ConsoleArgs) -> Self {
        Self {
            ask_new_game: !args.once,
            json_summary: args.json,
        }
    }
}

/// Coordinate being prompted for
#[derive(Clone, Copy, Debug)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }
}

// ============================================================================
// CONSOLE
// ============================================================================

/// Read-eval-print loop over one engine
pub struct Console<R, W> {
    engine: Engine,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(engine: Engine, config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            engine,
            config,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    // ========================================================================
    // LEVEL 1 - SESSION
    // ========================================================================

    /// Play games until the player declines another one or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            if !self.play_round()? {
                tracing::debug!("input closed during a game");
                break;
            }

            self.report_outcome()?;

            if !self.config.ask_new_game || !self.ask_new_game()? {
                break;
            }

            self.engine.restart();
            tracing::info!("new game started");
        }

        writeln!(self.output)?;
        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;

        Ok(())
    }

    // ========================================================================
    // LEVEL 2 - PHASES
    // ========================================================================

    /// Returns false if input ended before the game was decided
    fn play_round(&mut self) -> Result<bool> {
        while self.engine.game_state() != GameState::Complete {
            self.draw_ui()?;

            let Some(x) = self.read_coordinate(Axis::X)? else {
                return Ok(false);
            };
            let Some(y) = self.read_coordinate(Axis::Y)? else {
                return Ok(false);
            };

            self.handle_placement(x, y)?;
        }

        Ok(true)
    }

    fn report_outcome(&mut self) -> Result<()> {
        let message = match self.engine.winner() {
            Some(token) => format!("Game over. Winner is {}.", token_symbol(Some(token))),
            None => "Game over. Game draw.".to_string(),
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", message)?;
        writeln!(self.output)?;

        if self.config.json_summary {
            let summary = GameSummary::from_engine(&self.engine)
                .to_json()
                .context("failed to serialize game summary")?;
            writeln!(self.output, "{}", summary)?;
        }

        Ok(())
    }

    /// `y` starts a new game; `n` or end of input stops
    fn ask_new_game(&mut self) -> Result<bool> {
        writeln!(self.output, "Do you want to start a new game? (y/n) ")?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            let answer = line.trim();

            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }

            tracing::debug!(answer, "unrecognized answer");
            writeln!(self.output, "unknown input, please enter 'y' or 'n'")?;
            self.output.flush()?;
        }
    }

    // ========================================================================
    // LEVEL 3 - TURN HANDLING
    // ========================================================================

    fn draw_ui(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Current player: {}",
            token_symbol(Some(self.engine.next_token()))
        )?;

        for line in board_lines(&self.engine) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;

        Ok(())
    }

    /// Prompt until a 1-based value within the board is entered.
    /// `None` when input ends.
    fn read_coordinate(&mut self, axis: Axis) -> Result<Option<i32>> {
        let bound = match axis {
            Axis::X => self.engine.width(),
            Axis::Y => self.engine.height(),
        };

        loop {
            write!(self.output, "Please enter {} (1 to {}): ", axis.label(), bound)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let input = line.trim();

            match input.parse::<i32>() {
                Err(_) => {
                    tracing::debug!(input, "non-numeric coordinate");
                    writeln!(self.output, "Input invalid, please enter valid value")?;
                }
                Ok(n) if n <= 0 => {
                    writeln!(self.output, "Must be non-zero positive integer")?;
                }
                Ok(n) if n as usize > bound => {
                    writeln!(self.output, "Too large (>{})", bound)?;
                }
                Ok(n) => return Ok(Some(n)),
            }
        }
    }

    /// `x` and `y` are 1-based, as typed
    fn handle_placement(&mut self, x: i32, y: i32) -> Result<()> {
        match self.engine.try_place(x - 1, y - 1) {
            Ok(()) => {}
            Err(PlaceError::Occupied { .. }) => {
                tracing::debug!(x, y, "cell occupied");
                writeln!(
                    self.output,
                    "cell ({}, {}) is already occupied, please reenter",
                    x, y
                )?;
            }
            Err(err) => {
                tracing::debug!(x, y, %err, "placement rejected");
                writeln!(self.output, "coordinates invalid, please reenter")?;
            }
        }

        Ok(())
    }

    // ========================================================================
    // LEVEL 4 - LINE I/O
    // ========================================================================

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;

        Ok((read > 0).then_some(line))
    }
}
