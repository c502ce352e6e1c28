//! Common test utilities for the noughts test suite.
//!
//! Random but reproducible play used by the property-style tests.

#![allow(dead_code)]

use std::io::Cursor;

use noughts::{Board, Mark, console::Console, search::choose_move};
use rand::{rngs::StdRng, seq::IndexedRandom};

/// In-memory console fed with `input`
pub fn scripted_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Pick a uniformly random empty cell, or `None` on a full board
pub fn random_empty_cell(board: &Board, rng: &mut StdRng) -> Option<(usize, usize)> {
    board
        .empty_cells()
        .choose(rng)
        .map(|cell| cell.coordinates())
}

/// Play uniformly random alternating moves from an empty board.
///
/// Returns every board reached, starting with the empty one and ending at a
/// terminal position.
pub fn random_playout(first: Mark, rng: &mut StdRng) -> Vec<Board> {
    let mut board = Board::new();
    let mut states = vec![board];
    let mut to_move = first;

    while !board.is_terminal() {
        let (row, col) =
            random_empty_cell(&board, rng).expect("non-terminal board has a free cell");
        assert!(board.set_move(row, col, to_move));
        states.push(board);
        to_move = -to_move;
    }

    states
}

/// Play the computer against a random human until the game ends
pub fn computer_vs_random(human_first: bool, rng: &mut StdRng) -> Board {
    let mut board = Board::new();
    let mut human_to_move = human_first;

    while !board.is_terminal() {
        if human_to_move {
            let (row, col) = random_empty_cell(&board, rng).expect("free cell");
            board.set_move(row, col, Mark::Human);
        } else {
            let decision = choose_move(&mut board, rng).expect("computer has a move");
            let (row, col) = decision.coordinates().expect("decision names a cell");
            assert!(board.set_move(row, col, Mark::Computer));
        }
        human_to_move = !human_to_move;
    }

    board
}
