//! noughts CLI - Play tic-tac-toe against a perfect minimax opponent

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::commands::{
    play::{self, PlayArgs},
    solve::{self, SolveArgs},
};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
struct Cli {
    /// Log search decisions and rejected input to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer (default)
    Play(PlayArgs),

    /// Find the best move in a given position
    Solve(SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::init_tracing(cli.verbose);
    noughts::cli::install_interrupt_handler()?;

    let result = match cli.command.unwrap_or(Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => play::execute(args),
        Commands::Solve(args) => solve::execute(args),
    };

    match result {
        Err(err)
            if matches!(
                err.downcast_ref::<noughts::Error>(),
                Some(noughts::Error::UserTermination)
            ) =>
        {
            noughts::cli::farewell();
            Ok(())
        }
        other => other,
    }
}
