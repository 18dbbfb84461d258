//! Machine-readable summary of a finished game (`--json`)

use serde::Serialize;
use tictactoe_core::{Engine, Token};

use crate::render::board_lines;

/// How the game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
}

/// One JSON line per completed game
#[derive(Clone, Debug, Serialize)]
pub struct GameSummary {
    pub result: Outcome,
    pub winner: Option<Token>,
    pub moves: usize,
    pub board: Vec<String>,
}

impl GameSummary {
    pub fn from_engine(engine: &Engine) -> Self {
        let winner = engine.winner();
        Self {
            result: if winner.is_some() { Outcome::Win } else { Outcome::Draw },
            winner,
            moves: engine.placed_count(),
            board: board_lines(engine),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
