mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BoardError};
pub use bot_controller::{BotDecision, BotInput, BotRule, calculate_move, choose_bot_move};
pub use game_state::{MoveError, TicTacToeGameState};
pub use types::{
    GameMode, GameStatus, LineKind, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, Player, PlayerKind,
    Position, WinningLine,
};
pub use win_detector::{check_win, check_win_at, evaluate, find_winning_line};
