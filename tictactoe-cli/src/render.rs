//! Text rendering of tokens and the board

use tictactoe_core::{Engine, Token};

/// Single-character symbol for a cell
pub fn token_symbol(token: Option<Token>) -> char {
    match token {
        Some(Token::Circle) => 'O',
        Some(Token::Cross) => 'X',
        None => '.',
    }
}

/// One line per row, cells separated by a space
pub fn board_lines(engine: &Engine) -> Vec<String> {
    engine
        .board()
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| token_symbol(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
