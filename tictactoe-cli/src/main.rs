//! TicTacToe CLI - two-player game in the terminal
//!
//! Moves are read from stdin, the board is printed to stdout.
//! Logs go to stderr; set RUST_LOG (e.g. `RUST_LOG=debug`) to see them.

mod console;
mod render;
mod summary;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use console::{Console, ConsoleArgs, ConsoleConfig};
use tictactoe_core::Engine;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a 3x3 board")]
struct Cli {
    #[command(flatten)]
    console: ConsoleArgs,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = ConsoleConfig::from(&cli.console);
    tracing::debug!(?config, "starting console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(Engine::new(), config, stdin.lock(), stdout.lock());

    console.run()?;
    tracing::debug!(
        state = ?console.engine().game_state(),
        moves = console.engine().placed_count(),
        "session ended"
    );

    Ok(())
}

/// Stderr keeps log lines out of the rendered board
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
