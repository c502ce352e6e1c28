//! Exhaustive minimax search over the remaining game tree
//!
//! The search works on a single `&mut Board`: each candidate move is placed,
//! explored recursively and cleared again before the next sibling is tried, so
//! the caller's board is unchanged once [`minimax`] returns.

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Mark, SIZE};

/// Best move found by the search and its minimax value.
///
/// Leaves carry the sentinel coordinates `(-1, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub row: i32,
    pub col: i32,
    pub score: i32,
}

impl SearchResult {
    /// A "no move" result at a terminal or depth-exhausted node
    pub fn leaf(score: i32) -> Self {
        SearchResult {
            row: -1,
            col: -1,
            score,
        }
    }

    /// The chosen cell, or `None` for a leaf
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        if self.row < 0 || self.col < 0 {
            None
        } else {
            Some((self.row as usize, self.col as usize))
        }
    }
}

/// Search every continuation of `board` for `player` and return the best move.
///
/// `depth` is the number of empty cells. The computer maximises and the human
/// minimises; a candidate only replaces the current best on a strict
/// improvement, so among equal scores the first cell in row-major order wins.
pub fn minimax(board: &mut Board, depth: usize, player: Mark) -> SearchResult {
    debug_assert!(player.is_player(), "minimax requires an active player");

    if depth == 0 || board.is_game_over() {
        return SearchResult::leaf(board.evaluate());
    }

    let mut best = match player {
        Mark::Computer => SearchResult::leaf(i32::MIN),
        _ => SearchResult::leaf(i32::MAX),
    };

    for cell in board.empty_cells() {
        let (row, col) = cell.coordinates();
        board.set_move(row, col, player);
        let mut candidate = minimax(board, depth - 1, -player);
        board.clear(row, col);

        candidate.row = row as i32;
        candidate.col = col as i32;

        let improves = match player {
            Mark::Computer => candidate.score > best.score,
            _ => candidate.score < best.score,
        };
        if improves {
            best = candidate;
        }
    }

    best
}

/// Run [`minimax`] for `player` at the board's current depth
pub fn analyze(board: &mut Board, player: Mark) -> SearchResult {
    let depth = board.empty_count();
    minimax(board, depth, player)
}

/// How the computer arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Uniformly random cell on an empty board
    RandomOpening { row: usize, col: usize },
    /// Full minimax search
    Searched(SearchResult),
}

impl Decision {
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        match self {
            Decision::RandomOpening { row, col } => Some((*row, *col)),
            Decision::Searched(result) => result.coordinates(),
        }
    }
}

/// Pick the computer's move for the current position.
///
/// On an empty board every opening is equally good under this evaluation, so a
/// random cell is returned instead of searching all nine plies. Returns `None`
/// once the game is over.
pub fn choose_move<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Decision> {
    let depth = board.empty_count();
    if depth == 0 || board.is_game_over() {
        return None;
    }

    if depth == SIZE * SIZE {
        let cells = board.empty_cells();
        let cell = cells.choose(rng)?;
        return Some(Decision::RandomOpening {
            row: cell.row,
            col: cell.col,
        });
    }

    let result = minimax(board, depth, Mark::Computer);
    result.coordinates().map(|_| Decision::Searched(result))
}
