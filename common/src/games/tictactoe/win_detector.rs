use super::board::Board;
use super::types::{GameStatus, LineKind, Mark, Player, Position, WinningLine};

/// Scans rows, then columns, then the main diagonal, then the anti-diagonal.
/// The first line fully held by one player wins.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();

    for (row, marks) in board.rows().enumerate() {
        if let Some(player) = line_owner(marks.iter().copied()) {
            return Some(WinningLine::new(player, LineKind::Row(row)));
        }
    }

    for col in 0..size {
        if let Some(player) = line_owner(column(board, col)) {
            return Some(WinningLine::new(player, LineKind::Column(col)));
        }
    }

    if let Some(player) = line_owner(main_diagonal(board)) {
        return Some(WinningLine::new(player, LineKind::MainDiagonal));
    }

    if let Some(player) = line_owner(anti_diagonal(board)) {
        return Some(WinningLine::new(player, LineKind::AntiDiagonal));
    }

    None
}

pub fn check_win(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|line| line.player)
}

/// A completed line beats a full board.
pub fn evaluate(board: &Board, move_count: usize) -> GameStatus {
    if let Some(player) = check_win(board) {
        return GameStatus::won_by(player);
    }

    if move_count >= board.cell_count() {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}

/// Checks only the lines passing through `pos`.
pub fn check_win_at(board: &Board, pos: Position) -> Option<Player> {
    let player = board.get(pos)?.player()?;
    let last = board.size() - 1;

    let won = owned_by(board.row(pos.row).into_iter().flatten().copied(), player)
        || owned_by(column(board, pos.col), player)
        || (pos.row == pos.col && owned_by(main_diagonal(board), player))
        || (pos.row + pos.col == last && owned_by(anti_diagonal(board), player));

    won.then_some(player)
}

fn owned_by(marks: impl Iterator<Item = Mark>, player: Player) -> bool {
    line_owner(marks) == Some(player)
}

fn line_owner(mut marks: impl Iterator<Item = Mark>) -> Option<Player> {
    let first = marks.next()?;
    let player = first.player()?;
    marks.all(|mark| mark == first).then_some(player)
}

fn column(board: &Board, col: usize) -> impl Iterator<Item = Mark> + '_ {
    board.rows().map(move |row| row[col])
}

fn main_diagonal(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    board.rows().enumerate().map(|(i, row)| row[i])
}

fn anti_diagonal(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    let last = board.size() - 1;
    board.rows().enumerate().map(move |(i, row)| row[last - i])
}
