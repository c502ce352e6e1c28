//! Console tic-tac-toe against an exhaustive minimax opponent
//!
//! This crate provides:
//! - A 3x3 board model with win detection and terminal evaluation
//! - Full-depth minimax search with first-found tie breaking
//! - A thin game controller and text console for human play
//! - The `noughts` CLI for playing and for solving positions

pub mod cli;
pub mod console;
pub mod error;
pub mod game;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use game::{Game, Outcome, Symbol, Symbols};
pub use search::{Decision, SearchResult, choose_move, minimax};
pub use tictactoe::{Board, Cell, Mark};
