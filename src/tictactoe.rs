//! Tic-Tac-Toe board model

pub mod board;
pub mod lines;
pub mod mark;

pub use board::{Board, Cell, SIZE};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use mark::Mark;
