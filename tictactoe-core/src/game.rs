//! Game state, placement rules and win/draw detection

use crate::board::{self, Board, Token, CELL_COUNT, HEIGHT, WIDTH};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Token that moves first in every game
pub const DEFAULT_NEXT_TOKEN: Token = Token::Circle;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Complete,
}

/// Reason a placement was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },

    #[error("game is already complete")]
    GameComplete,
}

// ============================================================================
// ENGINE
// ============================================================================

/// Tic-tac-toe engine (mutated in place, `restart` to reuse)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    board: Board,

    /// Token placed by the next successful move
    next_token: Token,

    game_state: GameState,

    /// Only set when a line is completed
    winner: Option<Token>,

    /// Occupied cells, for the draw check
    placed_count: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create an engine with an empty board, Circle to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_token: DEFAULT_NEXT_TOKEN,
            game_state: GameState::InProgress,
            winner: None,
            placed_count: 0,
        }
    }

    /// Reset to the exact state of a freshly constructed engine
    pub fn restart(&mut self) {
        *self = Self::new();
        tracing::debug!("engine restarted");
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Token at (x, y), `None` if the cell is empty or off the board
    pub fn token(&self, x: i32, y: i32) -> Option<Token> {
        if Board::in_bounds(x, y) {
            self.board.cell(x as usize, y as usize)
        } else {
            None
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn next_token(&self) -> Token {
        self.next_token
    }

    pub fn winner(&self) -> Option<Token> {
        self.winner
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    // ========================================================================
    // PLACEMENT
    // ========================================================================

    /// Place the next token at (x, y). Returns false, leaving the engine
    /// untouched, if the move is rejected for any reason.
    pub fn place(&mut self, x: i32, y: i32) -> bool {
        self.try_place(x, y).is_ok()
    }

    /// Like [`Engine::place`], reporting why a move was rejected.
    ///
    /// Rules are checked in order: bounds, occupancy, game state.
    pub fn try_place(&mut self, x: i32, y: i32) -> Result<(), PlaceError> {
        if !Board::in_bounds(x, y) {
            return Err(PlaceError::OutOfBounds { x, y });
        }

        let (cx, cy) = (x as usize, y as usize);
        if self.board.cell(cx, cy).is_some() {
            return Err(PlaceError::Occupied { x, y });
        }

        if self.game_state != GameState::InProgress {
            return Err(PlaceError::GameComplete);
        }

        let token = self.next_token;
        self.board.set(cx, cy, token);
        self.placed_count += 1;
        tracing::debug!(x, y, ?token, "token placed");

        self.update_state();

        // Winner keeps the turn marker once the game is over
        if self.game_state == GameState::InProgress {
            self.next_token = token.opponent();
        }

        Ok(())
    }

    // ========================================================================
    // STATE UPDATE
    // ========================================================================

    /// Rows, then columns, then diagonals, then draw. Stops at the first win.
    fn update_state(&mut self) {
        let winner = self
            .check_rows()
            .or_else(|| self.check_columns())
            .or_else(|| self.check_diagonals());

        match winner {
            Some(token) => self.complete(Some(token)),
            None => self.check_draw(),
        }
    }

    fn check_rows(&self) -> Option<Token> {
        (0..HEIGHT).find_map(|y| self.board.line_winner(board::row(y)))
    }

    fn check_columns(&self) -> Option<Token> {
        (0..WIDTH).find_map(|x| self.board.line_winner(board::column(x)))
    }

    fn check_diagonals(&self) -> Option<Token> {
        self.board
            .line_winner(board::main_diagonal())
            .or_else(|| self.board.line_winner(board::anti_diagonal()))
    }

    /// Must run after every line check
    fn check_draw(&mut self) {
        if self.placed_count == CELL_COUNT
            && self.winner.is_none()
            && self.game_state == GameState::InProgress
        {
            self.complete(None);
        }
    }

    fn complete(&mut self, winner: Option<Token>) {
        self.game_state = GameState::Complete;
        self.winner = winner;
        tracing::info!(?winner, moves = self.placed_count, "game complete");
    }
}
