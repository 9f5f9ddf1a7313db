use crate::board::Board;

/// Check whether `val` can be placed at (row, col) without clashing
/// with another cell in the same row, column, or block.
pub fn can_place(board: &Board, row: usize, col: usize, val: u8) -> bool {
    let n = board.size.cells();
    let b = board.size.block();

    for c in 0..n {
        if c != col && board.values[row][c] == val {
            return false;
        }
    }
    for r in 0..n {
        if r != row && board.values[r][col] == val {
            return false;
        }
    }
    let block_r = (row / b) * b;
    let block_c = (col / b) * b;
    for r in block_r..block_r + b {
        for c in block_c..block_c + b {
            if (r != row || c != col) && board.values[r][c] == val {
                return false;
            }
        }
    }
    true
}

/// Check whether the current values form a complete valid solution:
/// every row, column, and block holds each of 1..=N exactly once.
/// Empty or out-of-range cells simply fail the check.
pub fn is_solved(board: &Board) -> bool {
    let n = board.size.cells();
    let b = board.size.block();

    for i in 0..n {
        let mut row_seen = vec![false; n + 1];
        let mut col_seen = vec![false; n + 1];
        for j in 0..n {
            if !mark(&mut row_seen, board.values[i][j], n) {
                return false;
            }
            if !mark(&mut col_seen, board.values[j][i], n) {
                return false;
            }
        }
    }

    for block_r in (0..n).step_by(b) {
        for block_c in (0..n).step_by(b) {
            let mut seen = vec![false; n + 1];
            for r in block_r..block_r + b {
                for c in block_c..block_c + b {
                    if !mark(&mut seen, board.values[r][c], n) {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Record `val` in `seen`; false if it is empty, out of range, or a
/// duplicate within the unit.
fn mark(seen: &mut [bool], val: u8, n: usize) -> bool {
    let v = val as usize;
    if v == 0 || v > n || seen[v] {
        return false;
    }
    seen[v] = true;
    true
}
