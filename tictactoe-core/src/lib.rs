//! TicTacToe Core - Game engine
//!
//! This crate provides the core game logic:
//! - Board geometry (fixed 3x3 grid, row/column/diagonal lines)
//! - Turn sequencing (Circle moves first, strict alternation)
//! - Placement legality and win/draw detection

pub mod board;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, Token, CELL_COUNT, HEIGHT, WIDTH};
pub use game::{Engine, GameState, PlaceError, DEFAULT_NEXT_TOKEN};
