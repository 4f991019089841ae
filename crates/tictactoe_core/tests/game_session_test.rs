//! End-to-end sessions driven through a scripted console.

use tictactoe_core::{Game, GameOptions, Marker, Phase, Player, ScriptedConsole};

fn play(inputs: &[&str], options: GameOptions) -> (Game, ScriptedConsole) {
    let mut game = Game::new(options);
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    game.run(&mut console).expect("session completes");
    (game, console)
}

#[test]
fn test_row_win_then_decline() {
    let (game, console) = play(
        &["Ada", "Grace", "A1", "B1", "A2", "B2", "A3", "n"],
        GameOptions::default(),
    );

    assert_eq!(game.phase(), &Phase::Finished);
    assert_eq!(console.remaining(), 0);
    assert_eq!(console.count("Game over! Ada wins!"), 1);
    assert_eq!(console.count("Play again? y / n"), 1);
    assert_eq!(game.summary().wins_for(&Player::new("Ada", Marker::X)), 1);
    assert_eq!(game.summary().rounds(), &1);

    let board = game.round().expect("round played").board();
    assert_eq!(board.render(), "  1 2 3\nA X|X|X\nB O|O|_\nC _|_|_");
}

#[test]
fn test_prompts_in_order() {
    let (_, console) = play(&["Ada", "Grace"], GameOptions::default());
    let output = console.output();

    assert_eq!(output[0], "Welcome to Tic-Tac-Toe!");
    assert_eq!(output[1], "What is Player 1's name? They will be X");
    assert_eq!(output[2], "What is Player 2's name? They will be O");
    assert_eq!(output[3], "It's Ada's turn!");
    assert_eq!(output[4], "  1 2 3\nA _|_|_\nB _|_|_\nC _|_|_");
    assert_eq!(output[5], "Ada, where would you like to mark the board?");
}

#[test]
fn test_invalid_input_reprompts_same_player() {
    let (game, console) = play(
        &["Ada", "Grace", "", "A12", "D1", "A9", "AX", "B2", "B2", "C3"],
        GameOptions::default(),
    );

    assert_eq!(console.count("Type the coordinates with no spaces, e.g. A1"), 2);
    assert_eq!(console.count("Enter a valid row letter A-C"), 1);
    assert_eq!(console.count("Enter a valid column 1-3"), 2);
    assert_eq!(console.count("This spot is already filled!"), 1);

    // Ada: five rejections, then B2, then the prompt that hits end of input.
    assert_eq!(console.count("It's Ada's turn!"), 7);
    // Grace: one rejection, then C3.
    assert_eq!(console.count("It's Grace's turn!"), 2);

    let round = game.round().expect("round started");
    assert_eq!(round.moves().len(), 2);
    assert_eq!(game.phase(), &Phase::Finished);
    assert_eq!(game.summary().rounds(), &0);
}

#[test]
fn test_tie_announced() {
    let (game, console) = play(
        &[
            "Ada", "Grace", "A1", "A2", "A3", "B2", "B1", "C1", "C2", "B3", "C3", "no",
        ],
        GameOptions::default(),
    );

    assert_eq!(console.count("Game over! It's a tie."), 1);
    assert_eq!(game.summary().ties(), &1);
    assert_eq!(game.summary().rounds(), &1);
}

#[test]
fn test_replay_collects_names_again() {
    let (game, console) = play(
        &[
            "Ada", "Grace", "A1", "B1", "A2", "B2", "A3", "y",
            "Linus", "Ken", "C1", "A1", "C2", "A2", "B3", "A3", "n",
        ],
        GameOptions::default(),
    );

    assert_eq!(console.count("Welcome to Tic-Tac-Toe!"), 2);
    assert_eq!(console.count("Game over! Ada wins!"), 1);
    assert_eq!(console.count("Game over! Ken wins!"), 1);
    assert_eq!(game.summary().rounds(), &2);

    // Fresh board for the second round: no marks leak from the first.
    let round = game.round().expect("second round");
    assert_eq!(round.player(tictactoe_core::Seat::First).name(), "Linus");
    assert_eq!(round.moves().len(), 6);
}

#[test]
fn test_replay_reuses_names_when_configured() {
    let options = GameOptions::default().with_reuse_players(true);
    let (game, console) = play(
        &[
            "Ada", "Grace", "A1", "B1", "A2", "B2", "A3", "y",
            "B1", "A1", "B2", "A2", "B3", "n",
        ],
        options,
    );

    assert_eq!(console.count("What is Player 1's name? They will be X"), 1);
    assert_eq!(game.summary().wins_for(&Player::new("Ada", Marker::X)), 2);
}

#[test]
fn test_malformed_replay_answer_ends_session() {
    let (game, console) = play(
        &["Ada", "Grace", "A1", "B1", "A2", "B2", "A3", "yes", "Linus"],
        GameOptions::default(),
    );

    assert_eq!(game.phase(), &Phase::Finished);
    assert_eq!(console.count("Play again? y / n"), 1);
    assert_eq!(console.remaining(), 1);
}

#[test]
fn test_first_marker_option() {
    let options = GameOptions::default().with_first_marker(Marker::O);
    let (game, console) = play(&["Ada", "Grace", "B2", "n"], options);

    assert_eq!(console.count("What is Player 1's name? They will be O"), 1);
    assert_eq!(console.count("What is Player 2's name? They will be X"), 1);
    let board = game.round().expect("round started").board();
    assert_eq!(board.render(), "  1 2 3\nA _|_|_\nB _|O|_\nC _|_|_");
}

#[test]
fn test_board_shown_after_move_can_be_disabled() {
    let options = GameOptions::new("y", false, Marker::X, false);
    let (_, console) = play(&["Ada", "Grace", "B2"], options);

    // Only the per-turn renders: one before Ada's move, one before Grace's.
    let renders = console
        .output()
        .iter()
        .filter(|line| line.starts_with("  1 2 3"))
        .count();
    assert_eq!(renders, 2);
}

#[test]
fn test_same_named_players_tallied_apart() {
    let options = GameOptions::default().with_reuse_players(true);
    let (game, console) = play(
        &[
            "Sam", "Sam", "A1", "B1", "A2", "B2", "A3", "y",
            "C3", "A1", "C2", "A2", "B3", "A3", "n",
        ],
        options,
    );

    let transcript = console.transcript();
    assert_eq!(transcript.matches("Game over! Sam wins!").count(), 2);
    assert!(transcript.ends_with("Play again? y / n"));

    let summary = game.summary();
    assert_eq!(summary.wins_for(&Player::new("Sam", Marker::X)), 1);
    assert_eq!(summary.wins_for(&Player::new("Sam", Marker::O)), 1);
    assert_eq!(summary.wins().len(), 2);
}
