use super::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize { size: usize },
    AllocationFailed { size: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidSize { size } => write!(
                f,
                "Board size {} is out of range, expected {} to {}",
                size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ),
            BoardError::AllocationFailed { size } => {
                write!(f, "Failed to allocate a {}x{} board", size, size)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Square grid stored row-major in one buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }

        let cell_count = size * size;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .map_err(|_| BoardError::AllocationFailed { size })?;
        cells.resize(cell_count, Mark::Empty);

        Ok(Self { cells, size })
    }

    /// Builds a board from rows like `"XO "`; any character other than `X`/`O` is empty.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), size, "row {} has wrong width", row);
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
                board.set(Position::new(row, col), mark);
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        let index = self.index(pos);
        self.cells[index] = mark;
    }

    pub fn row(&self, row: usize) -> Option<&[Mark]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks_exact(self.size)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(move |(index, _)| Position::new(index / size, index % size))
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();

        assert_eq!(board.size(), 4);
        assert_eq!(board.cell_count(), 16);
        assert_eq!(board.empty_cells().count(), 16);
        assert!(board.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn test_new_rejects_out_of_range_sizes() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize { size: 0 }));
        assert_eq!(
            Board::new(MAX_BOARD_SIZE + 1),
            Err(BoardError::InvalidSize { size: MAX_BOARD_SIZE + 1 })
        );
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert_eq!(Board::new(1).unwrap().cell_count(), 1);
        assert_eq!(
            Board::new(MAX_BOARD_SIZE).unwrap().cell_count(),
            MAX_BOARD_SIZE * MAX_BOARD_SIZE
        );
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new(3).unwrap();

        assert_eq!(board.get(Position::new(3, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
        assert!(!board.is_empty_at(Position::new(5, 5)));
    }

    #[test]
    fn test_from_rows_layout() {
        let board = Board::from_rows(&["X O", " X ", "O  "]);

        assert_eq!(board.get(Position::new(0, 0)), Some(Mark::X));
        assert_eq!(board.get(Position::new(0, 2)), Some(Mark::O));
        assert_eq!(board.get(Position::new(2, 0)), Some(Mark::O));
        assert_eq!(board.row(1), Some(&[Mark::Empty, Mark::X, Mark::Empty][..]));
    }

    #[test]
    fn test_row_out_of_bounds_is_none() {
        let board = Board::new(3).unwrap();

        assert_eq!(board.row(2).map(<[Mark]>::len), Some(3));
        assert_eq!(board.row(3), None);
        assert_eq!(board.row(usize::MAX), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(&["XO", " X"]);
        let empty: Vec<Position> = board.empty_cells().collect();

        assert_eq!(empty, vec![Position::new(1, 0)]);
    }
}
