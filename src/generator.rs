use std::error::Error;
use std::fmt;

use log::debug;
use rand::RngExt;
use rand::rng;
use rand::seq::SliceRandom;

use crate::board::{Board, HintBudget};
use crate::difficulty::Difficulty;
use crate::validation::can_place;

/// Hint budget handed out when the removal count comes from a
/// difficulty band rather than from the player.
pub const RANDOM_MODE_HINTS: usize = 3;

/// The backtracking fill ran out of candidates. Cannot happen starting
/// from an empty board; only a contradictory pre-seeded grid gets here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationError;

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the grid has no valid completion")
    }
}

impl Error for GenerationError {}

/// Rejected custom-game settings. The board is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomGameError {
    /// The removal count must be strictly between 0 and N*N.
    RemoveCountOutOfRange { count: usize, limit: usize },
    /// The hint budget must stay below the removal count.
    TooManyHints { hints: usize, count: usize },
}

impl fmt::Display for CustomGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomGameError::RemoveCountOutOfRange { count, limit } => {
                write!(f, "cannot remove {count} cells, expected 1 to {limit}")
            }
            CustomGameError::TooManyHints { hints, count } => {
                write!(f, "{hints} hints do not fit under {count} removed cells")
            }
        }
    }
}

impl Error for CustomGameError {}

/// Complete the board with randomized backtracking and freeze the
/// result as the answer grid.
///
/// Cells already holding a value are kept, so a fresh board yields a
/// uniformly shuffled full solution while a contradictory partial grid
/// backtracks all the way out and reports failure with the original
/// cells intact.
pub fn fill(board: &mut Board) -> Result<(), GenerationError> {
    if !fill_cells(board) {
        return Err(GenerationError);
    }
    board.answers = board.values.clone();
    Ok(())
}

/// Recursive backtracking step: take the first empty cell in row-major
/// order and try each candidate in shuffled order. Worst-case depth is
/// N*N (625 for 25x25), well within the native stack.
fn fill_cells(board: &mut Board) -> bool {
    let Some((row, col)) = first_empty(board) else {
        return true;
    };
    let mut rng = rng();
    let n = board.size.cells() as u8;
    let mut candidates: Vec<u8> = (1..=n).collect();
    candidates.shuffle(&mut rng);
    for val in candidates {
        if can_place(board, row, col, val) {
            board.values[row][col] = val;
            if fill_cells(board) {
                return true;
            }
            board.values[row][col] = 0;
        }
    }
    false
}

fn first_empty(board: &Board) -> Option<(usize, usize)> {
    let n = board.size.cells();
    for row in 0..n {
        for col in 0..n {
            if board.values[row][col] == 0 {
                return Some((row, col));
            }
        }
    }
    None
}

/// Turn a solved board into a puzzle by blanking a removal count drawn
/// from the difficulty band. Returns the count that was removed.
pub fn remove_for_difficulty(board: &mut Board, difficulty: Difficulty) -> usize {
    let (lo, hi) = difficulty.removal_range(board.size());
    let count = rng().random_range(lo..=hi);
    clear_cells(board, count, RANDOM_MODE_HINTS);
    count
}

/// Turn a solved board into a puzzle with player-chosen settings.
pub fn remove_custom(
    board: &mut Board,
    count: usize,
    hint_max: usize,
) -> Result<(), CustomGameError> {
    let total = board.size().cells() * board.size().cells();
    if count == 0 || count >= total {
        return Err(CustomGameError::RemoveCountOutOfRange {
            count,
            limit: total - 1,
        });
    }
    if hint_max >= count {
        return Err(CustomGameError::TooManyHints {
            hints: hint_max,
            count,
        });
    }
    clear_cells(board, count, hint_max);
    Ok(())
}

fn clear_cells(board: &mut Board, count: usize, hint_max: usize) {
    let n = board.size.cells();
    let mut rng = rng();

    let mut cells: Vec<(usize, usize)> = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            cells.push((r, c));
        }
    }
    cells.shuffle(&mut rng);
    for &(r, c) in cells.iter().take(count) {
        board.values[r][c] = 0;
    }

    // Full pass: every surviving value becomes a locked given, every
    // blank stays open for the player.
    for r in 0..n {
        for c in 0..n {
            board.editable[r][c] = board.values[r][c] == 0;
        }
    }

    board.removed_count = count;
    board.hints = HintBudget {
        used: 0,
        max: hint_max,
    };
    board.revealed = false;
    debug!("removed {count} cells from the solved grid, {hint_max} hints available");
}
