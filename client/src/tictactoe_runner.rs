use std::io::{self, Write};

use tictactoe_common::games::tictactoe::{
    GameStatus, MoveError, Player, PlayerKind, TicTacToeGameState, choose_bot_move,
};
use tictactoe_common::log;

use crate::board_view::render_board;
use crate::console_input::{InputError, InputProvider};

#[derive(Debug)]
pub enum RunnerError {
    Input(InputError),
    Output(io::Error),
    /// The bot produced a move the engine refused.
    BotMove(MoveError),
    NoMoveAvailable,
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerError::Input(e) => write!(f, "Input error: {}", e),
            RunnerError::Output(e) => write!(f, "Output error: {}", e),
            RunnerError::BotMove(e) => write!(f, "Bot move rejected: {}", e),
            RunnerError::NoMoveAvailable => write!(f, "No move available for the bot"),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<InputError> for RunnerError {
    fn from(e: InputError) -> Self {
        RunnerError::Input(e)
    }
}

impl From<io::Error> for RunnerError {
    fn from(e: io::Error) -> Self {
        RunnerError::Output(e)
    }
}

impl From<MoveError> for RunnerError {
    fn from(e: MoveError) -> Self {
        RunnerError::BotMove(e)
    }
}

/// Plays turns until the game reaches a terminal status, then prints the final board and result.
pub fn run_tictactoe_game<I: InputProvider, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut I,
    out: &mut W,
) -> Result<GameStatus, RunnerError> {
    let status = loop {
        write!(out, "{}", render_board(state.board()))?;
        writeln!(out)?;

        match state.current_player_kind() {
            PlayerKind::Human => play_human_turn(state, input, out)?,
            PlayerKind::Bot => play_bot_turn(state, out)?,
        }

        if let Some(pos) = state.last_move() {
            let (row, col) = pos.to_one_based();
            log!("{} played ({}, {})", state.current_player(), row, col);
        }

        let status = state.complete_turn();
        if status.is_terminal() {
            break status;
        }
    };

    log!("Game over after {} moves: {:?}", state.move_count(), status);

    write!(out, "{}", render_board(state.board()))?;
    writeln!(out)?;
    writeln!(out, "{}", game_over_message(state, status))?;
    Ok(status)
}

fn play_human_turn<I: InputProvider, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut I,
    out: &mut W,
) -> Result<(), RunnerError> {
    match state.current_player() {
        Player::X => writeln!(out, "Player 1 turn (X)\n")?,
        Player::O => writeln!(out, "Player 2 turn (O)\n")?,
    }

    let size = state.size();
    loop {
        let row = input.read_int_in_range("Enter row: ", 1, size)?;
        let col = input.read_int_in_range("Enter column: ", 1, size)?;

        match state.apply_move(row, col) {
            Ok(()) => return Ok(()),
            Err(e) => {
                log!("Rejected move for {}: {}", state.current_player(), e);
                writeln!(out, "Invalid play! {}. Try again.", e)?;
            }
        }
    }
}

fn play_bot_turn<W: Write>(state: &mut TicTacToeGameState, out: &mut W) -> Result<(), RunnerError> {
    writeln!(out, "Bot's turn ({})\n", state.current_player())?;

    let decision = choose_bot_move(state).ok_or(RunnerError::NoMoveAvailable)?;
    let (row, col) = decision.position.to_one_based();
    writeln!(out, "Bot plays at row {}, column {}", row, col)?;

    state.apply_position(decision.position)?;
    Ok(())
}

pub fn game_over_message(state: &TicTacToeGameState, status: GameStatus) -> String {
    let headline = match status.winner() {
        Some(Player::X) => "CONGRATS Player 1 WON THE GAME!",
        Some(Player::O) if state.player_kind(Player::O) == PlayerKind::Bot => "The bot (O) won.",
        Some(Player::O) => "CONGRATS Player 2 WON THE GAME!",
        None if status == GameStatus::Tie => return "It's a tie!".to_string(),
        None => return "The game is still in progress.".to_string(),
    };

    match state.winning_line() {
        Some(line) => format!("{}\n{} completed {}.", headline, line.player, line.kind),
        None => headline.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console_input::ConsoleInput;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{GameMode, Mark, Position};

    struct ScriptedGame {
        state: TicTacToeGameState,
        result: Result<GameStatus, RunnerError>,
        output: String,
        prompts: String,
    }

    fn play(size: usize, mode: GameMode, script: &str) -> ScriptedGame {
        let mut state = TicTacToeGameState::new(size, mode).unwrap();
        let mut input = ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut out = Vec::new();

        let result = run_tictactoe_game(&mut state, &mut input, &mut out);

        ScriptedGame {
            state,
            result,
            output: String::from_utf8(out).unwrap(),
            prompts: String::from_utf8(input.into_writer()).unwrap(),
        }
    }

    #[test]
    fn test_human_vs_human_x_wins() {
        let game = play(3, GameMode::HumanVsHuman, "1\n1\n2\n1\n1\n2\n2\n2\n1\n3\n");

        assert_eq!(game.result.unwrap(), GameStatus::XWon);
        assert!(game.output.contains("Player 1 turn (X)"));
        assert!(game.output.contains("Player 2 turn (O)"));
        assert!(game.output.contains("CONGRATS Player 1 WON THE GAME!"));
        assert!(game.output.contains("X completed row 1."));
        assert_eq!(game.state.move_count(), 5);
        assert_eq!(game.state.last_move(), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_two_by_two_diagonal_win() {
        let game = play(2, GameMode::HumanVsHuman, "1\n1\n1\n2\n2\n2\n");

        assert_eq!(game.result.unwrap(), GameStatus::XWon);
        assert!(game.output.contains("X completed the main diagonal."));
        assert_eq!(game.state.move_count(), 3);
    }

    #[test]
    fn test_human_vs_human_o_wins() {
        let game = play(3, GameMode::HumanVsHuman, "1\n1\n2\n2\n1\n2\n1\n3\n2\n1\n3\n1\n");

        assert_eq!(game.result.unwrap(), GameStatus::OWon);
        assert!(game.output.contains("CONGRATS Player 2 WON THE GAME!"));
        assert!(game.output.contains("O completed the anti-diagonal."));
        assert_eq!(game.state.move_count(), 6);
        assert_eq!(game.state.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_reprompts_without_passing_turn() {
        let game = play(3, GameMode::HumanVsHuman, "1\n1\n1\n1\n2\n2\n");

        assert!(game.output.contains("Invalid play! Position (1, 1) is already taken. Try again."));
        assert_eq!(game.state.board().get(Position::new(0, 0)), Some(Mark::X));
        assert_eq!(game.state.board().get(Position::new(1, 1)), Some(Mark::O));
        assert!(matches!(game.result, Err(RunnerError::Input(InputError::Closed))));
    }

    #[test]
    fn test_out_of_range_input_reprompts() {
        let game = play(1, GameMode::HumanVsHuman, "0\n2\n1\nx\n1\n");

        assert_eq!(game.result.unwrap(), GameStatus::XWon);
        assert_eq!(game.prompts.matches("Please enter a value between 1 and 1.").count(), 2);
        assert_eq!(game.prompts.matches("Invalid input, please enter a number.").count(), 1);
    }

    #[test]
    fn test_single_cell_game_is_a_win() {
        let game = play(1, GameMode::HumanVsBot, "1\n1\n");

        assert_eq!(game.result.unwrap(), GameStatus::XWon);
        assert!(!game.output.contains("tie"));
    }

    #[test]
    fn test_bot_takes_center_and_blocks() {
        // X: (1,1); bot: center; X: (1,2); bot must block (1,3).
        let game = play(3, GameMode::HumanVsBot, "1\n1\n1\n2\n");

        assert!(game.output.contains("Bot's turn (O)"));
        assert!(game.output.contains("Bot plays at row 2, column 2"));
        assert!(game.output.contains("Bot plays at row 1, column 3"));
        assert_eq!(game.state.board().get(Position::new(0, 2)), Some(Mark::O));
        assert!(matches!(game.result, Err(RunnerError::Input(InputError::Closed))));
    }

    #[test]
    fn test_bot_wins() {
        // Bot opens in the center, then takes corner (1, 3) and completes the anti-diagonal.
        let game = play(3, GameMode::HumanVsBot, "1\n1\n3\n3\n3\n2\n");

        assert_eq!(game.result.unwrap(), GameStatus::OWon);
        assert!(game.output.contains("Bot plays at row 1, column 3"));
        assert!(game.output.contains("Bot plays at row 3, column 1"));
        assert!(game.output.contains("The bot (O) won."));
        assert_eq!(game.state.last_move(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_row_and_column_on_one_line() {
        let game = play(3, GameMode::HumanVsHuman, "1 1\n2 1\n1 2\n2 2\n1 3\n");

        assert_eq!(game.result.unwrap(), GameStatus::XWon);
        assert_eq!(game.state.move_count(), 5);
        assert!(!game.prompts.contains("Invalid input"));
    }

    #[test]
    fn test_game_over_message_for_unfinished_game() {
        let state = TicTacToeGameState::new(3, GameMode::HumanVsBot).unwrap();

        assert_eq!(
            game_over_message(&state, GameStatus::InProgress),
            "The game is still in progress."
        );
    }

    #[test]
    fn test_bot_game_ends_in_tie() {
        let game = play(3, GameMode::HumanVsBot, "1\n1\n1\n2\n3\n1\n2\n3\n3\n2\n");

        assert_eq!(game.result.unwrap(), GameStatus::Tie);
        assert!(game.output.contains("It's a tie!"));
        assert_eq!(game.state.move_count(), 9);
    }

    #[test]
    fn test_closed_input_stops_game() {
        let game = play(3, GameMode::HumanVsHuman, "");

        assert!(matches!(game.result, Err(RunnerError::Input(InputError::Closed))));
        assert_eq!(game.state.move_count(), 0);
    }
}
