//! Winning line analysis for Tic-Tac-Toe

use super::Mark;

/// Winning lines on the 3x3 board as (row, col) triples
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if `mark` fills any complete line
    pub fn has_won(cells: &[[Mark; 3]; 3], mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| cells[row][col] == mark))
    }

    /// Find every cell that would immediately complete a line for `mark`
    pub fn winning_moves(cells: &[[Mark; 3]; 3], mark: Mark) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for line in &WINNING_LINES {
            if let Some(pos) = Self::winning_move_in_line(cells, mark, line) {
                if !moves.contains(&pos) {
                    moves.push(pos);
                }
            }
        }
        moves.sort_unstable();
        moves
    }

    /// Find the completing cell in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[[Mark; 3]; 3],
        mark: Mark,
        line: &[(usize, usize); 3],
    ) -> Option<(usize, usize)> {
        let mut count = 0;
        let mut empty_pos = None;

        for &(row, col) in line {
            match cells[row][col] {
                Mark::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some((row, col));
                }
                m if m == mark => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
