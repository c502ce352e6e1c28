//! Scripted console sessions through the play command

mod common;

use noughts::{
    Error, Outcome,
    cli::{
        commands::play::{PlayArgs, run},
        config::GameConfig,
    },
    game::Symbol,
};

use common::scripted_console;

/// Keypad digits 1-9 repeated; the human takes the next free cell in the cycle
fn keypad_cycle(rounds: usize) -> String {
    (0..rounds)
        .flat_map(|_| (1..=9).map(|digit| format!("{digit}\n")))
        .collect()
}

fn play(config: &GameConfig, input: &str) -> (noughts::Result<Outcome>, String) {
    let mut console = scripted_console(input);
    let result = run(config, &mut console);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

#[test]
fn naive_human_never_beats_the_computer() {
    for human_first in [true, false] {
        let config = GameConfig::default()
            .with_symbol(Symbol::X)
            .with_human_first(human_first);
        let (result, output) = play(&config, &keypad_cycle(10));

        let outcome = result.expect("game should finish");
        assert_ne!(outcome, Outcome::HumanWins);
        assert_eq!(output.lines().last(), Some(outcome.message()));
    }
}

#[test]
fn human_playing_only_edges_loses() {
    let config = GameConfig::default()
        .with_symbol(Symbol::X)
        .with_human_first(true);
    let (result, output) = play(&config, "2\n4\n6\n8\n");

    assert_eq!(result.unwrap(), Outcome::ComputerWins);
    assert!(!output.contains("Bad move"));
    assert_eq!(output.lines().last(), Some("YOU LOSE!"));

    // Computer closes the anti-diagonal with its fourth mark
    let final_board = "| O || X || O |\n---------------\n\
                       | X || O || X |\n---------------\n\
                       | O || X ||   |\n---------------\n\nYOU LOSE!\n";
    assert!(output.ends_with(final_board), "output:\n{output}");
}

#[test]
fn keypad_cycle_loses_when_human_opens() {
    let config = GameConfig::default()
        .with_symbol(Symbol::X)
        .with_human_first(true);
    let (result, output) = play(&config, &keypad_cycle(10));

    assert_eq!(result.unwrap(), Outcome::ComputerWins);
    assert_eq!(output.lines().last(), Some("YOU LOSE!"));
}

#[test]
fn prompts_answered_interactively() {
    let input = format!("o\nn\n{}", keypad_cycle(10));
    let (result, output) = play(&GameConfig::default(), &input);

    assert!(result.is_ok());
    let first_turn = output.find("Computer turn [X]").expect("computer moved");
    let first_human = output.find("Human turn [O]").expect("human moved");
    assert!(first_turn < first_human, "computer should open");
}

#[test]
fn occupied_cells_are_rejected_without_ending_the_game() {
    let config = GameConfig::default()
        .with_symbol(Symbol::O)
        .with_human_first(true);
    let (result, output) = play(&config, &format!("5\n5\n{}", keypad_cycle(10)));

    assert!(result.is_ok());
    assert!(output.contains("Bad move"));
}

#[test]
fn end_of_input_mid_game_terminates() {
    let config = GameConfig::default()
        .with_symbol(Symbol::X)
        .with_human_first(true);
    let (result, output) = play(&config, "1\n");

    assert!(matches!(result, Err(Error::UserTermination)));
    assert!(output.contains("Computer turn [O]"));
}

#[test]
fn same_seed_same_game() {
    let config = GameConfig::default()
        .with_symbol(Symbol::X)
        .with_human_first(false)
        .with_seed(11);
    let script = keypad_cycle(10);

    let (first, first_output) = play(&config, &script);
    let (second, second_output) = play(&config, &script);
    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_output, second_output);
}

#[test]
fn command_line_flags_skip_prompts() {
    let args = PlayArgs {
        symbol: Some("x".to_string()),
        first: Some("yes".to_string()),
        seed: Some(3),
    };
    let config = args.to_config().unwrap();
    let (result, output) = play(&config, &keypad_cycle(10));

    assert!(result.is_ok());
    assert!(!output.contains("Choose X or O"));
    assert!(!output.contains("First to start?"));
}
