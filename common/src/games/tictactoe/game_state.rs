use super::board::{Board, BoardError};
use super::types::{GameMode, GameStatus, Player, PlayerKind, Position, WinningLine};
use super::win_detector::{evaluate, find_winning_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates are 1-based, as entered by the user.
    OutOfBounds { row: usize, col: usize, size: usize },
    CellOccupied { row: usize, col: usize },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col, size } => write!(
                f,
                "Invalid coordinates ({}, {}), row and column must be between 1 and {}",
                row, col, size
            ),
            MoveError::CellOccupied { row, col } => {
                write!(f, "Position ({}, {}) is already taken", row, col)
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    move_count: usize,
    current_player: Player,
    player_x: PlayerKind,
    player_o: PlayerKind,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(size: usize, mode: GameMode) -> Result<Self, BoardError> {
        let (player_x, player_o) = mode.player_kinds();
        Ok(Self {
            board: Board::new(size)?,
            move_count: 0,
            current_player: Player::X,
            player_x,
            player_o,
            last_move: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_board(board: Board, current_player: Player, mode: GameMode) -> Self {
        let (player_x, player_o) = mode.player_kinds();
        let move_count = board.cell_count() - board.empty_cells().count();
        Self {
            board,
            move_count,
            current_player,
            player_x,
            player_o,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn player_kind(&self, player: Player) -> PlayerKind {
        match player {
            Player::X => self.player_x,
            Player::O => self.player_o,
        }
    }

    pub fn current_player_kind(&self) -> PlayerKind {
        self.player_kind(self.current_player)
    }

    /// Places the current player's mark at 1-based `(row, col)`.
    /// The move counter, turn and result are left to [`Self::complete_turn`].
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let size = self.board.size();
        let pos = Position::from_one_based(row, col)
            .filter(|pos| self.board.contains(*pos))
            .ok_or(MoveError::OutOfBounds { row, col, size })?;

        if !self.board.is_empty_at(pos) {
            return Err(MoveError::CellOccupied { row, col });
        }

        self.board.set(pos, self.current_player.mark());
        self.last_move = Some(pos);
        Ok(())
    }

    pub fn apply_position(&mut self, pos: Position) -> Result<(), MoveError> {
        let (row, col) = pos.to_one_based();
        self.apply_move(row, col)
    }

    /// Counts the applied move, evaluates the board and passes the turn
    /// unless the game just ended.
    pub fn complete_turn(&mut self) -> GameStatus {
        self.move_count += 1;
        let status = self.status();
        if !status.is_terminal() {
            self.current_player = self.current_player.opponent();
        }
        status
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.board, self.move_count)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.board)
    }
}
