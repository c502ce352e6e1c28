//! Play command - Interactive game against the minimax opponent

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    cli::config::{GameConfig, parse_first_token, parse_symbol_token},
    console::Console,
    game::{Game, Outcome, Symbols},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play tic-tac-toe against the computer")]
pub struct PlayArgs {
    /// Symbol you play with (`x` or `o`); asked interactively when omitted
    #[arg(long, short = 's')]
    pub symbol: Option<String>,

    /// Whether you move first (`yes` or `no`); asked interactively when omitted
    #[arg(long, short = 'f')]
    pub first: Option<String>,

    /// Random seed for the computer's opening move
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    /// Turn command-line flags into a game configuration
    pub fn to_config(&self) -> crate::Result<GameConfig> {
        let mut config = GameConfig::default();
        if let Some(ref value) = self.symbol {
            config = config.with_symbol(parse_symbol_token(value, "--symbol")?);
        }
        if let Some(ref value) = self.first {
            config = config.with_human_first(parse_first_token(value, "--first")?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

/// Ask for anything the configuration leaves open, then play one game
pub fn run<R: BufRead, W: Write>(
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> crate::Result<Outcome> {
    let symbol = match config.human_symbol {
        Some(symbol) => symbol,
        None => console.pick_symbol()?,
    };
    let human_first = match config.human_first {
        Some(first) => first,
        None => console.pick_first()?,
    };

    info!(seed = config.seed, "seeded opening");
    let mut game = Game::new(Symbols::for_human(symbol), human_first, config.seed);
    game.run(console)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run(&config, &mut console)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{cli::config::DEFAULT_SEED, game::Symbol};

    #[test]
    fn test_args_to_config() {
        let args = PlayArgs {
            symbol: Some("o".to_string()),
            first: Some("no".to_string()),
            seed: None,
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.human_symbol, Some(Symbol::O));
        assert_eq!(config.human_first, Some(false));
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_args_reject_bad_symbol() {
        let args = PlayArgs {
            symbol: Some("q".to_string()),
            ..PlayArgs::default()
        };
        assert!(args.to_config().is_err());
    }

    #[test]
    fn test_prompts_for_missing_settings() {
        // Symbol and first-player prompts, then the human quits at the first move
        let mut console = Console::new(Cursor::new(b"x\ny\n".to_vec()), Vec::new());
        let err = run(&GameConfig::default(), &mut console).unwrap_err();
        assert!(matches!(err, crate::Error::UserTermination));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Choose X or O"));
        assert!(output.contains("First to start?[y/n]"));
        assert!(output.contains("Human turn [X]"));
    }
}
