//! Game loop controller: turn order, move application and outcome detection

use std::{
    fmt,
    io::{BufRead, Write},
    str::FromStr,
};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    console::{Console, render_board},
    search::{Decision, choose_move},
    tictactoe::{Board, Mark},
};

/// Display character a side plays with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opposite(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            other => Err(Error::InvalidInput {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Symbols assigned to the human and the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub human: Symbol,
    pub computer: Symbol,
}

impl Symbols {
    /// The computer gets whichever symbol the human did not pick
    pub fn for_human(human: Symbol) -> Self {
        Self {
            human,
            computer: human.opposite(),
        }
    }

    /// Character used to draw a cell
    pub fn char_for(&self, mark: Mark) -> char {
        match mark {
            Mark::Human => self.human.to_char(),
            Mark::Computer => self.computer.to_char(),
            Mark::Empty => ' ',
        }
    }
}

/// Final result of a game, from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::HumanWins => "YOU WIN!",
            Outcome::ComputerWins => "YOU LOSE!",
            Outcome::Draw => "DRAW!",
        }
    }
}

/// A single game in progress. Owns the only board for its whole lifetime.
pub struct Game {
    board: Board,
    symbols: Symbols,
    human_first: bool,
    rng: StdRng,
}

impl Game {
    /// Create a new game with an empty board
    pub fn new(symbols: Symbols, human_first: bool, seed: u64) -> Self {
        Game {
            board: Board::new(),
            symbols,
            human_first,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the outcome once the game has finished
    pub fn outcome(&self) -> Option<Outcome> {
        match self.board.winner() {
            Some(Mark::Human) => Some(Outcome::HumanWins),
            Some(Mark::Computer) => Some(Outcome::ComputerWins),
            _ if self.board.is_full() => Some(Outcome::Draw),
            _ => None,
        }
    }

    /// Place the human's mark.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OccupiedCell`] if the cell is taken.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<()> {
        if !self.board.set_move(row, col, Mark::Human) {
            return Err(Error::OccupiedCell { row, col });
        }
        debug!(row, col, "human moved");
        Ok(())
    }

    /// Let the computer pick and apply its move. Returns `None` if the game is over.
    pub fn play_computer_turn(&mut self) -> Option<Decision> {
        let decision = choose_move(&mut self.board, &mut self.rng)?;
        let (row, col) = decision.coordinates()?;
        let applied = self.board.set_move(row, col, Mark::Computer);
        debug_assert!(applied, "computer picked occupied cell ({row}, {col})");
        match decision {
            Decision::RandomOpening { .. } => debug!(row, col, "computer opened at random"),
            Decision::Searched(result) => {
                debug!(row, col, score = result.score, "computer moved")
            }
        }
        Some(decision)
    }

    fn render<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say(&render_board(&self.board, &self.symbols))
    }

    fn human_turn<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        if self.board.is_terminal() {
            return Ok(());
        }

        console.say("")?;
        console.say(&format!("Human turn [{}]", self.symbols.human))?;
        self.render(console)?;

        loop {
            let (row, col) = console.pick_cell()?;
            match self.apply_human_move(row, col) {
                Ok(()) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    debug!(%err, "rejected move");
                    console.say("Bad move")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn computer_turn<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        if self.board.is_terminal() {
            return Ok(());
        }

        console.say("")?;
        console.say(&format!("Computer turn [{}]", self.symbols.computer))?;
        self.render(console)?;

        let decision = self.play_computer_turn();
        debug_assert!(decision.is_some(), "no computer move on a live board");
        Ok(())
    }

    fn announce<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        outcome: Outcome,
    ) -> Result<()> {
        console.say("")?;
        match outcome {
            Outcome::HumanWins => console.say(&format!("Human turn [{}]", self.symbols.human))?,
            Outcome::ComputerWins => {
                console.say(&format!("Computer turn [{}]", self.symbols.computer))?
            }
            Outcome::Draw => {}
        }
        self.render(console)?;
        console.say(outcome.message())
    }

    /// Play the game to the end over `console`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::UserTermination`] if the user quits at a prompt.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Outcome> {
        info!(
            human = %self.symbols.human,
            computer = %self.symbols.computer,
            human_first = self.human_first,
            "game started"
        );

        if !self.human_first {
            self.computer_turn(console)?;
        }

        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }
            self.human_turn(console)?;
            self.computer_turn(console)?;
        };

        info!(?outcome, "game finished");
        self.announce(console, outcome)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!("x".parse::<Symbol>().unwrap(), Symbol::X);
        assert_eq!(" O ".parse::<Symbol>().unwrap(), Symbol::O);
        assert!("0".parse::<Symbol>().is_err());
        assert_eq!(Symbols::for_human(Symbol::O).computer, Symbol::X);
    }

    #[test]
    fn test_apply_human_move_rejects_occupied() {
        let mut game = Game::new(Symbols::for_human(Symbol::X), true, 1);
        game.apply_human_move(1, 1).unwrap();
        let err = game.apply_human_move(1, 1).unwrap_err();
        assert!(matches!(err, Error::OccupiedCell { row: 1, col: 1 }));
        assert_eq!(game.board().empty_count(), 8);
    }

    #[test]
    fn test_computer_opening_is_random_cell() {
        let mut game = Game::new(Symbols::for_human(Symbol::X), false, 2294);
        let decision = game.play_computer_turn().unwrap();
        assert!(matches!(decision, Decision::RandomOpening { .. }));
        assert_eq!(game.board().empty_count(), 8);
        let (row, col) = decision.coordinates().unwrap();
        assert_eq!(game.board().get(row, col), Mark::Computer);
    }

    #[test]
    fn test_computer_takes_the_win() {
        let mut game = Game::new(Symbols::for_human(Symbol::X), true, 0);
        game.board = Board::from_string("CC. HH. H..").unwrap();
        game.play_computer_turn().unwrap();
        assert_eq!(game.outcome(), Some(Outcome::ComputerWins));
        assert_eq!(game.play_computer_turn(), None);
    }

    #[test]
    fn test_computer_turn_places_exactly_one_mark() {
        let mut game = Game::new(Symbols::for_human(Symbol::O), true, 0);
        game.apply_human_move(0, 0).unwrap();
        let mut console = console("");
        game.computer_turn(&mut console).unwrap();

        assert_eq!(game.board().empty_count(), 7);
        assert_eq!(game.board().get(1, 1), Mark::Computer);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Computer turn [X]"));
    }

    #[test]
    fn test_computer_turn_skips_finished_game() {
        let mut game = Game::new(Symbols::for_human(Symbol::X), true, 0);
        game.board = Board::from_string("HHH CC. ...").unwrap();
        let mut console = console("");
        game.computer_turn(&mut console).unwrap();

        assert_eq!(game.board().empty_count(), 4);
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_run_rejects_bad_moves() {
        // Human takes the centre, then keeps trying the occupied centre
        let mut game = Game::new(Symbols::for_human(Symbol::X), true, 0);
        let mut console = console("5\n5\n0\n");
        let err = game.run(&mut console).unwrap_err();
        assert!(matches!(err, Error::UserTermination));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Human turn [X]"));
        assert!(output.contains("Computer turn [O]"));
        assert!(output.contains("Bad move"));
        assert!(output.contains("Bad choice"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::HumanWins.message(), "YOU WIN!");
        assert_eq!(Outcome::ComputerWins.message(), "YOU LOSE!");
        assert_eq!(Outcome::Draw.message(), "DRAW!");
    }
}
