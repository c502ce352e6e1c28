//! Solve command - Run the minimax search on a given position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    Error,
    cli::{
        config::parse_side_token,
        output::{format_cells, print_section, print_stats_table},
    },
    console::cell_to_keypad,
    search::{SearchResult, analyze},
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move in a position")]
pub struct SolveArgs {
    /// Board as 9 cells in reading order: `C` computer, `H` human, `.` empty
    pub board: String,

    /// Side to move (`computer` or `human`)
    #[arg(long, short = 'p', default_value = "computer")]
    pub player: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of searching one position
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub player: Mark,
    pub depth: usize,
    pub best: SearchResult,
    pub keypad: Option<u8>,
    pub immediate_wins: Vec<(usize, usize)>,
    pub threats: Vec<(usize, usize)>,
}

impl SolveReport {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse `board` and search it for `player`.
///
/// # Errors
///
/// Returns error if the board string is malformed or both sides already have a
/// winning line.
pub fn solve(board: &str, player: Mark) -> crate::Result<SolveReport> {
    let mut parsed = Board::from_string(board)?;
    if parsed.wins(Mark::Human) && parsed.wins(Mark::Computer) {
        return Err(Error::InvalidConfiguration {
            message: format!("both players cannot have winning lines in '{board}'"),
        });
    }

    let depth = parsed.empty_count();
    let best = analyze(&mut parsed, player);

    Ok(SolveReport {
        board: parsed.to_string().replace('\n', " "),
        player,
        depth,
        best,
        keypad: best.coordinates().map(|(row, col)| cell_to_keypad(row, col)),
        immediate_wins: parsed.winning_moves(player),
        threats: parsed.winning_moves(player.opponent()),
    })
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let player = parse_side_token(&args.player, "--player")?;
    let report = solve(&args.board, player)?;

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    print_section(&format!("Position {}", report.board));
    let best = match (report.best.coordinates(), report.keypad) {
        (Some((row, col)), Some(digit)) => format!("({row}, {col}) keypad {digit}"),
        _ => "none (position is decided)".to_string(),
    };
    print_stats_table(&[
        ("To move", format!("{:?}", report.player)),
        ("Depth", report.depth.to_string()),
        ("Best move", best),
        ("Score", report.best.score.to_string()),
        ("Wins now", format_cells(&report.immediate_wins)),
        ("Threats", format_cells(&report.threats)),
    ]);
    Ok(())
}
