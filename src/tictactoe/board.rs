//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LineAnalyzer, Mark};

/// Number of rows and columns on the board
pub const SIZE: usize = 3;

/// A position on the board together with its current occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

impl Cell {
    pub fn coordinates(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// The 3x3 grid of marks.
///
/// This type implements `Copy` since it's only 9 bytes, which makes taking a
/// snapshot before a search and comparing afterwards a plain `==`.
///
/// Coordinates are `(row, col)` in `0..3`. Passing anything larger is a caller
/// bug and panics on indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Mark::Empty; SIZE]; SIZE],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 characters once whitespace is filtered out,
    /// using `C` for the computer, `H` for the human and `.`, `_` or `-` for an
    /// empty cell.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 characters remain, or if any character is
    /// not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Mark};
    ///
    /// let board = Board::from_string("CC. ... ...").unwrap();
    /// assert_eq!(board.get(0, 1), Mark::Computer);
    /// assert_eq!(board.empty_cells().len(), 7);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Mark::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Mark::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(Board { cells })
    }

    /// Get the mark at a position
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    /// All cells currently marked Empty, in row-major order.
    ///
    /// The order decides which move the search picks among equally scored
    /// candidates.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.iter().filter(|cell| cell.mark == Mark::Empty).collect()
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..SIZE).flat_map(move |row| {
            (0..SIZE).map(move |col| Cell {
                row,
                col,
                mark: self.cells[row][col],
            })
        })
    }

    /// Number of empty cells, which is also the remaining search depth
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&mark| mark == Mark::Empty)
            .count()
    }

    /// Heuristic evaluation: +1 if the computer has a line, -1 if the human
    /// does, 0 otherwise
    pub fn evaluate(&self) -> i32 {
        if self.wins(Mark::Computer) {
            Mark::Computer.value()
        } else if self.wins(Mark::Human) {
            Mark::Human.value()
        } else {
            0
        }
    }

    /// Check if `mark` occupies any of the 8 winning lines
    pub fn wins(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(&self.cells, mark)
    }

    /// A move is valid if the chosen cell is empty
    pub fn valid_move(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Mark::Empty
    }

    /// Place `mark` at (row, col) if that cell is empty.
    ///
    /// Returns whether the move was applied.
    pub fn set_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if self.valid_move(row, col) {
            self.cells[row][col] = mark;
            true
        } else {
            false
        }
    }

    /// Reset a cell to Empty
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }

    /// Check if either player has a winning line
    pub fn is_game_over(&self) -> bool {
        self.wins(Mark::Human) || self.wins(Mark::Computer)
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.is_game_over() || self.is_full()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        if self.wins(Mark::Computer) {
            Some(Mark::Computer)
        } else if self.wins(Mark::Human) {
            Some(Mark::Human)
        } else {
            None
        }
    }

    /// Cells that would complete a line for `mark` right now
    pub fn winning_moves(&self, mark: Mark) -> Vec<(usize, usize)> {
        LineAnalyzer::winning_moves(&self.cells, mark)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, marks) in self.cells.iter().enumerate() {
            for mark in marks {
                write!(f, "{}", mark.to_char())?;
            }
            if row + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
