//! Text prompts, keypad parsing and board rendering
//!
//! [`Console`] is generic over any `BufRead`/`Write` pair so whole games can be
//! scripted in tests with an in-memory cursor.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    Error, Result,
    game::{Symbol, Symbols},
    tictactoe::{Board, SIZE},
};

/// Horizontal rule drawn between board rows
const RULE: &str = "---------------";

/// Inputs that end the session from any prompt
const QUIT_WORDS: [&str; 2] = ["q", "quit"];

/// Map a keypad digit (1-9, reading order) to a board cell
pub fn keypad_to_cell(digit: u8) -> Option<(usize, usize)> {
    match digit {
        1..=9 => {
            let index = usize::from(digit - 1);
            Some((index / SIZE, index % SIZE))
        }
        _ => None,
    }
}

/// Map a board cell back to its keypad digit
pub fn cell_to_keypad(row: usize, col: usize) -> u8 {
    debug_assert!(row < SIZE && col < SIZE);
    (row * SIZE + col + 1) as u8
}

/// Parse a line of user input as a keypad selection.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for anything other than a digit 1-9.
pub fn parse_keypad(input: &str) -> Result<(usize, usize)> {
    let trimmed = input.trim();
    trimmed
        .parse::<u8>()
        .ok()
        .and_then(keypad_to_cell)
        .ok_or_else(|| Error::InvalidInput {
            input: trimmed.to_string(),
        })
}

/// Parse a yes/no answer (`y`, `yes`, `n`, `no`, any case)
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(Error::InvalidInput {
            input: other.to_string(),
        }),
    }
}

/// Draw the board with the players' chosen symbols
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut out = format!("\n{RULE}\n");
    for row in 0..SIZE {
        for col in 0..SIZE {
            out.push_str(&format!("| {} |", symbols.char_for(board.get(row, col))));
        }
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Line-oriented console over an input reader and an output writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|source| Error::Io {
            operation: "write to console".to_string(),
            source,
        })
    }

    /// Show `prompt` and read one line.
    ///
    /// # Errors
    ///
    /// End-of-input or a quit word yields [`Error::UserTermination`].
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")
            .and_then(|_| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write prompt".to_string(),
                source,
            })?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read from console".to_string(),
                source,
            })?;
        if read == 0 {
            debug!("end of input at prompt");
            return Err(Error::UserTermination);
        }

        let answer = line.trim().to_string();
        if QUIT_WORDS.contains(&answer.to_ascii_lowercase().as_str()) {
            return Err(Error::UserTermination);
        }
        Ok(answer)
    }

    /// Ask until `parse` accepts the answer, printing `Bad choice` otherwise
    fn ask_until<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    debug!(%err, "rejected answer");
                    self.say("Bad choice")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Ask which symbol the human plays
    pub fn pick_symbol(&mut self) -> Result<Symbol> {
        self.say("")?;
        let symbol = self.ask_until("Choose X or O\nChosen: ", |s| s.parse::<Symbol>())?;
        self.say("")?;
        Ok(symbol)
    }

    /// Ask whether the human moves first
    pub fn pick_first(&mut self) -> Result<bool> {
        self.ask_until("First to start?[y/n]: ", parse_yes_no)
    }

    /// Ask for a keypad digit until it names a cell, without checking occupancy
    pub fn pick_cell(&mut self) -> Result<(usize, usize)> {
        self.ask_until("Use numpad (1..9): ", parse_keypad)
    }
}
