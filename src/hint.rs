use rand::RngExt;
use rand::rng;

use crate::board::Board;

/// Result of asking for a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    /// One empty cell now holds its answer and is locked.
    Revealed { row: usize, col: usize, value: u8 },
    /// The hint budget is exhausted; nothing changed.
    NoHintsRemaining,
    /// There is no empty editable cell left; nothing changed.
    NoEmptyCells,
}

/// Reveal the answer of one randomly chosen empty cell, consuming one
/// hint. The revealed cell is locked so it no longer counts as player
/// territory.
pub fn reveal_hint(board: &mut Board) -> HintOutcome {
    if board.hints.remaining() == 0 {
        return HintOutcome::NoHintsRemaining;
    }

    let n = board.size.cells();
    let mut empty: Vec<(usize, usize)> = Vec::new();
    for r in 0..n {
        for c in 0..n {
            if board.values[r][c] == 0 && board.editable[r][c] {
                empty.push((r, c));
            }
        }
    }
    if empty.is_empty() {
        return HintOutcome::NoEmptyCells;
    }

    let (row, col) = empty[rng().random_range(0..empty.len())];
    let value = board.answers[row][col];
    board.values[row][col] = value;
    board.editable[row][col] = false;
    board.hints.used += 1;
    HintOutcome::Revealed { row, col, value }
}
