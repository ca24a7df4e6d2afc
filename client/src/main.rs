mod board_view;
mod config;
mod console_input;
mod settings;
mod tictactoe_runner;

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use tictactoe_common::games::tictactoe::{GameMode, TicTacToeGameState};
use tictactoe_common::{log, logger};

use config::{DEFAULT_CONFIG_FILE, get_config_manager};
use console_input::{ConsoleInput, InputError};
use settings::resolve_settings;
use tictactoe_runner::{RunnerError, run_tictactoe_game};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    HumanVsHuman,
    HumanVsBot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
            ModeArg::HumanVsBot => GameMode::HumanVsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Variable-size tic-tac-toe for the terminal")]
struct Args {
    /// Skip the mode prompt
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Skip the board size prompt
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=1000))]
    size: Option<u16>,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Write diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = get_config_manager(&args.config).load()?;

    let prefix = if args.use_log_prefix {
        Some(config.logging.prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, args.verbose || config.logging.enabled);

    println!("Welcome to variable Tic Tac Toe game!\n");
    println!("Player 1 = X");
    println!("Player 2 / Bot = O\n");

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());

    let settings = match resolve_settings(
        args.mode.map(GameMode::from),
        args.size.map(usize::from),
        &config.game,
        &mut input,
    ) {
        Ok(settings) => settings,
        Err(InputError::Closed) => {
            log!("Input closed before the game started");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    log!("Starting {:?} on a {}x{} board", settings.mode, settings.board_size, settings.board_size);

    let mut state = TicTacToeGameState::new(settings.board_size, settings.mode)?;

    let mut out = io::stdout().lock();
    match run_tictactoe_game(&mut state, &mut input, &mut out) {
        Ok(_) => {}
        Err(RunnerError::Input(InputError::Closed)) => {
            log!("Input closed after {} moves", state.move_count());
            writeln!(out, "\nInput closed, leaving the game.")?;
        }
        Err(e) => return Err(e.into()),
    }

    out.flush()?;
    Ok(())
}
