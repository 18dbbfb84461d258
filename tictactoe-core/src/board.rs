//! Board geometry and line evaluation

use serde::{Deserialize, Serialize};

/// Board width in cells
pub const WIDTH: usize = 3;

/// Board height in cells
pub const HEIGHT: usize = 3;

/// Total number of cells
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Player token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Circle,
    Cross,
}

impl Token {
    pub fn opponent(self) -> Self {
        match self {
            Token::Circle => Token::Cross,
            Token::Cross => Token::Circle,
        }
    }
}

/// Fixed grid of optional tokens, stored row-major (`y * WIDTH + x`)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Token>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if signed coordinates land on the board
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT
    }

    /// Token at (x, y); `None` for empty or off-board cells
    pub fn cell(&self, x: usize, y: usize) -> Option<Token> {
        if x < WIDTH && y < HEIGHT {
            self.cells[y * WIDTH + x]
        } else {
            None
        }
    }

    /// Caller guarantees (x, y) is on the board
    pub(crate) fn set(&mut self, x: usize, y: usize, token: Token) {
        self.cells[y * WIDTH + x] = Some(token);
    }

    /// Token owning a line, if every cell on it is occupied by that token
    pub fn line_winner<I>(&self, line: I) -> Option<Token>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut owner = None;

        for (x, y) in line {
            // An empty cell disqualifies the whole line
            let token = self.cell(x, y)?;
            match owner {
                None => owner = Some(token),
                Some(first) if first != token => return None,
                Some(_) => {}
            }
        }

        owner
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = [Option<Token>; WIDTH]> + '_ {
        self.cells.chunks_exact(WIDTH).map(|chunk| {
            let mut row = [None; WIDTH];
            row.copy_from_slice(chunk);
            row
        })
    }
}

// ============================================================================
// LINES
// ============================================================================

/// Cells of row `y`, left to right
pub fn row(y: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..WIDTH).map(move |x| (x, y))
}

/// Cells of column `x`, top to bottom
pub fn column(x: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..HEIGHT).map(move |y| (x, y))
}

/// Top-left to bottom-right
pub fn main_diagonal() -> impl Iterator<Item = (usize, usize)> {
    (0..WIDTH.min(HEIGHT)).map(|i| (i, i))
}

/// Top-right to bottom-left
pub fn anti_diagonal() -> impl Iterator<Item = (usize, usize)> {
    (0..WIDTH.min(HEIGHT)).map(|i| (WIDTH - 1 - i, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize, Token)]) -> Board {
        let mut board = Board::new();
        for &(x, y, token) in cells {
            board.set(x, y, token);
        }
        board
    }

    #[test]
    fn test_bounds() {
        assert!(Board::in_bounds(0, 0));
        assert!(Board::in_bounds(2, 2));
        assert!(!Board::in_bounds(-1, 0));
        assert!(!Board::in_bounds(0, -1));
        assert!(!Board::in_bounds(3, 0));
        assert!(!Board::in_bounds(0, 3));
        assert!(!Board::in_bounds(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_cell_off_board_is_empty() {
        let board = board_with(&[(0, 1, Token::Cross)]);
        // (3, 0) would alias (0, 1) in a naive flat index
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, 1), Some(Token::Cross));
    }

    #[test]
    fn test_line_winner() {
        let board = board_with(&[
            (0, 0, Token::Circle),
            (1, 0, Token::Circle),
            (2, 0, Token::Circle),
            (0, 1, Token::Cross),
            (1, 1, Token::Circle),
        ]);
        assert_eq!(board.line_winner(row(0)), Some(Token::Circle));
        assert_eq!(board.line_winner(row(1)), None); // gap at (2, 1)
        assert_eq!(board.line_winner(column(0)), None); // mixed
        assert_eq!(board.line_winner(main_diagonal()), None);
    }

    #[test]
    fn test_diagonal_cells() {
        let main: Vec<_> = main_diagonal().collect();
        let anti: Vec<_> = anti_diagonal().collect();
        assert_eq!(main, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(anti, vec![(2, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_rows_are_row_major() {
        let board = board_with(&[(2, 0, Token::Cross), (0, 2, Token::Circle)]);
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows[0], [None, None, Some(Token::Cross)]);
        assert_eq!(rows[1], [None, None, None]);
        assert_eq!(rows[2], [Some(Token::Circle), None, None]);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Token::Circle.opponent(), Token::Cross);
        assert_eq!(Token::Cross.opponent(), Token::Circle);
    }
}
