use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Player, Position};
use super::win_detector::check_win_at;

const OPENING_BOARD_SIZE: usize = 3;
const OPENING_CENTER: Position = Position { row: 1, col: 1 };
const OPENING_CORNERS: [Position; 4] = [
    Position { row: 0, col: 0 },
    Position { row: 0, col: 2 },
    Position { row: 2, col: 0 },
    Position { row: 2, col: 2 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotRule {
    Win,
    Block,
    Opening,
    FirstEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotDecision {
    pub position: Position,
    pub rule: BotRule,
}

impl BotDecision {
    fn new(position: Position, rule: BotRule) -> Self {
        Self { position, rule }
    }
}

/// Owned snapshot the bot is free to scribble on.
pub struct BotInput {
    pub board: Board,
    pub bot: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board().clone(),
            bot: state.current_player(),
        }
    }
}

/// Picks a move for the player to act. The state is only read; look-ahead runs on a copy.
pub fn choose_bot_move(state: &TicTacToeGameState) -> Option<BotDecision> {
    let decision = calculate_move(BotInput::from_game_state(state));
    if let Some(decision) = decision {
        let (row, col) = decision.position.to_one_based();
        crate::log!(
            "Bot {} chose ({}, {}) by {:?}",
            state.current_player(),
            row,
            col,
            decision.rule
        );
    }
    decision
}

/// Rules in priority order: win, block, 3x3 opening, first empty cell.
/// Returns `None` only for a full board.
pub fn calculate_move(input: BotInput) -> Option<BotDecision> {
    let BotInput { mut board, bot } = input;
    let available_moves: Vec<Position> = board.empty_cells().collect();
    let first_empty = *available_moves.first()?;

    if let Some(pos) = find_winning_move(&mut board, bot, &available_moves) {
        return Some(BotDecision::new(pos, BotRule::Win));
    }

    if let Some(pos) = find_winning_move(&mut board, bot.opponent(), &available_moves) {
        return Some(BotDecision::new(pos, BotRule::Block));
    }

    if let Some(pos) = find_opening_move(&board) {
        return Some(BotDecision::new(pos, BotRule::Opening));
    }

    Some(BotDecision::new(first_empty, BotRule::FirstEmpty))
}

fn find_winning_move(board: &mut Board, player: Player, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.set(pos, player.mark());
        let winner = check_win_at(board, pos);
        board.set(pos, Mark::Empty);

        if winner == Some(player) {
            return Some(pos);
        }
    }
    None
}

fn find_opening_move(board: &Board) -> Option<Position> {
    if board.size() != OPENING_BOARD_SIZE {
        return None;
    }

    std::iter::once(OPENING_CENTER)
        .chain(OPENING_CORNERS)
        .find(|&pos| board.is_empty_at(pos))
}
