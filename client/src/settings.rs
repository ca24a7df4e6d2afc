use tictactoe_common::games::tictactoe::{GameMode, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use crate::config::GameConfig;
use crate::console_input::{InputError, InputProvider};

const MODE_PROMPT: &str =
    "Choose mode:\n1) Player vs Player\n2) Player vs Bot (you = X, bot = O)\nChoice: ";
const SIZE_PROMPT: &str =
    "What is the size of the board you want to play? Enter a number between 1 and 1000: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub mode: GameMode,
    pub board_size: usize,
}

/// Command line beats the config file; whatever is still unknown is asked for.
pub fn resolve_settings<I: InputProvider>(
    cli_mode: Option<GameMode>,
    cli_board_size: Option<usize>,
    config: &GameConfig,
    input: &mut I,
) -> Result<GameSettings, InputError> {
    let mode = match cli_mode.or(config.mode) {
        Some(mode) => mode,
        None => match input.read_int_in_range(MODE_PROMPT, 1, 2)? {
            1 => GameMode::HumanVsHuman,
            _ => GameMode::HumanVsBot,
        },
    };

    let board_size = match cli_board_size.or(config.board_size) {
        Some(size) => size,
        None => input.read_int_in_range(SIZE_PROMPT, MIN_BOARD_SIZE, MAX_BOARD_SIZE)?,
    };

    Ok(GameSettings { mode, board_size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console_input::ConsoleInput;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompts_for_everything_without_presets() {
        let mut input = console("2\n4\n");

        let settings = resolve_settings(None, None, &GameConfig::default(), &mut input).unwrap();

        assert_eq!(settings, GameSettings { mode: GameMode::HumanVsBot, board_size: 4 });
        let output = String::from_utf8(input.into_writer()).unwrap();
        assert!(output.contains("Choose mode:"));
        assert!(output.contains("size of the board"));
    }

    #[test]
    fn test_mode_one_is_human_vs_human() {
        let mut input = console("1\n3\n");

        let settings = resolve_settings(None, None, &GameConfig::default(), &mut input).unwrap();

        assert_eq!(settings.mode, GameMode::HumanVsHuman);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = GameConfig {
            mode: Some(GameMode::HumanVsHuman),
            board_size: Some(7),
        };
        let mut input = console("");

        let settings =
            resolve_settings(Some(GameMode::HumanVsBot), Some(3), &config, &mut input).unwrap();

        assert_eq!(settings, GameSettings { mode: GameMode::HumanVsBot, board_size: 3 });
        assert!(input.into_writer().is_empty());
    }

    #[test]
    fn test_config_fills_missing_cli_values() {
        let config = GameConfig {
            mode: Some(GameMode::HumanVsHuman),
            board_size: None,
        };
        let mut input = console("1000\n");

        let settings = resolve_settings(None, None, &config, &mut input).unwrap();

        assert_eq!(settings, GameSettings { mode: GameMode::HumanVsHuman, board_size: 1000 });
    }

    #[test]
    fn test_closed_input_while_prompting() {
        let mut input = console("");

        let result = resolve_settings(None, Some(3), &GameConfig::default(), &mut input);

        assert!(matches!(result, Err(InputError::Closed)));
    }
}
