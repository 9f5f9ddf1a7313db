use crate::board::Board;
use crate::validation::is_solved;

/// Percentage of the puzzle the player has solved, in `0.0..=100.0`.
///
/// A cell counts once it is still player-editable and holds its answer
/// value. Hint-revealed cells are locked, so they drop out of both the
/// numerator and the denominator (`removed_count - hints used`). A
/// denominator of zero or less reports 100.
pub fn progress(board: &Board) -> f64 {
    let total = board.removed_count.saturating_sub(board.hints.used);
    if total == 0 {
        return 100.0;
    }

    let n = board.size.cells();
    let mut correct = 0usize;
    for r in 0..n {
        for c in 0..n {
            if board.editable[r][c] && board.values[r][c] == board.answers[r][c] {
                correct += 1;
            }
        }
    }
    100.0 * correct as f64 / total as f64
}

/// Whether the current values form a valid completed Sudoku. Any valid
/// completion wins, not only the stored answer grid, since removal does
/// not guarantee a unique solution.
pub fn check_win(board: &Board) -> bool {
    is_solved(board)
}
