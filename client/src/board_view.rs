use tictactoe_common::games::tictactoe::Board;

/// Text grid with 1-based row and column headers:
///
/// ```text
///   1|2|3
///   -+-+-
/// 1 X| |O
///   -+-+-
/// 2  |X|
/// ```
///
/// Cells widen with the number of digits in the board size so headers stay aligned.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let cell_width = size.to_string().len();
    let indent = " ".repeat(cell_width + 1);

    let header = (1..=size)
        .map(|col| format!("{:<width$}", col, width = cell_width))
        .collect::<Vec<_>>()
        .join("|");
    let separator = vec!["-".repeat(cell_width); size].join("+");

    let mut out = String::new();
    out.push_str(&indent);
    out.push_str(header.trim_end());
    out.push('\n');

    for (row_index, row) in board.rows().enumerate() {
        out.push_str(&indent);
        out.push_str(&separator);
        out.push('\n');

        let cells = row
            .iter()
            .map(|mark| format!("{:<width$}", mark.symbol(), width = cell_width))
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&format!("{:<width$} ", row_index + 1, width = cell_width));
        out.push_str(&cells);
        out.push('\n');
    }

    out
}
