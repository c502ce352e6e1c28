//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::{Error, Result, game::Symbol, tictactoe::Mark};

/// Seed used when none is given, so the random opening is reproducible
pub const DEFAULT_SEED: u64 = 2294;

/// Settings for one interactive game.
///
/// Fields left as `None` are asked for at the console.
///
/// # Examples
///
/// ```
/// use noughts::cli::config::GameConfig;
/// use noughts::game::Symbol;
///
/// let config = GameConfig::default()
///     .with_symbol(Symbol::O)
///     .with_human_first(false)
///     .with_seed(42);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol the human plays with
    pub human_symbol: Option<Symbol>,

    /// Whether the human moves first
    pub human_first: Option<bool>,

    /// Random seed for the opening move
    pub seed: u64,
}

impl GameConfig {
    /// Set the human's symbol.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = Some(symbol);
        self
    }

    /// Set who moves first.
    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = Some(human_first);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_symbol: None,
            human_first: None,
            seed: DEFAULT_SEED,
        }
    }
}

fn invalid_flag(value: &str, flag: &str, expected: &str) -> Error {
    Error::InvalidConfiguration {
        message: format!("invalid value '{value}' for {flag} (expected {expected})"),
    }
}

/// Parse a `--symbol` value (`x` or `o`)
pub fn parse_symbol_token(value: &str, flag: &str) -> Result<Symbol> {
    value
        .parse::<Symbol>()
        .map_err(|_| invalid_flag(value, flag, "'x' or 'o'"))
}

/// Parse a `--first` value (`yes`/`no`, `human`/`computer`)
pub fn parse_first_token(value: &str, flag: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "human" | "me" => Ok(true),
        "n" | "no" | "computer" | "cpu" => Ok(false),
        _ => Err(invalid_flag(value, flag, "'yes' or 'no'")),
    }
}

/// Parse a `--player` value naming the side to search for
pub fn parse_side_token(value: &str, flag: &str) -> Result<Mark> {
    match value.trim().to_ascii_lowercase().as_str() {
        "c" | "computer" | "max" => Ok(Mark::Computer),
        "h" | "human" | "min" => Ok(Mark::Human),
        _ => Err(invalid_flag(value, flag, "'computer' or 'human'")),
    }
}
