//! Winning line detection

use super::grid::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a mark holds three in a row on any row, column, or diagonal.
///
/// Every cell of a candidate line is compared against the mark's cell value
/// individually.
pub(crate) fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
    let target = mark.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
