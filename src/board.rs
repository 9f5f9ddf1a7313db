use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported board sizes. Every size has an integer block width, so a
/// `GridSize` can never describe a grid without valid Sudoku blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSize {
    Four,
    Nine,
    Sixteen,
    TwentyFive,
}

impl GridSize {
    /// Side length of the grid.
    pub fn cells(&self) -> usize {
        match self {
            GridSize::Four => 4,
            GridSize::Nine => 9,
            GridSize::Sixteen => 16,
            GridSize::TwentyFive => 25,
        }
    }

    /// Side length of one block.
    pub fn block(&self) -> usize {
        match self {
            GridSize::Four => 2,
            GridSize::Nine => 3,
            GridSize::Sixteen => 4,
            GridSize::TwentyFive => 5,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GridSize::Four => "4x4",
            GridSize::Nine => "9x9",
            GridSize::Sixteen => "16x16",
            GridSize::TwentyFive => "25x25",
        }
    }

    pub fn all() -> &'static [GridSize] {
        &[
            GridSize::Four,
            GridSize::Nine,
            GridSize::Sixteen,
            GridSize::TwentyFive,
        ]
    }

    /// Look up the size for a side length, e.g. from a save file.
    pub fn from_cells(n: usize) -> Option<GridSize> {
        match n {
            4 => Some(GridSize::Four),
            9 => Some(GridSize::Nine),
            16 => Some(GridSize::Sixteen),
            25 => Some(GridSize::TwentyFive),
            _ => None,
        }
    }
}

/// How many automatic reveals the current puzzle has used and allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintBudget {
    pub used: usize,
    pub max: usize,
}

impl HintBudget {
    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.used)
    }
}

/// A rejected cell write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    /// The cell belongs to the initial puzzle or was hint-revealed.
    LockedCell { row: usize, col: usize },
    /// The value is outside `0..=N`.
    ValueOutOfRange { value: u8 },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::LockedCell { row, col } => {
                write!(f, "cell ({row}, {col}) is locked")
            }
            InvalidMove::ValueOutOfRange { value } => {
                write!(f, "value {value} is outside the grid range")
            }
        }
    }
}

impl Error for InvalidMove {}

/// One puzzle instance: current values, the solved answer grid, and
/// per-cell editability. `0` in `values` means an empty cell.
///
/// Changing the grid size is always discard-and-rebuild: construct a
/// fresh `Board` instead of resizing in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) size: GridSize,
    pub(crate) values: Vec<Vec<u8>>,
    pub(crate) answers: Vec<Vec<u8>>,
    pub(crate) editable: Vec<Vec<bool>>,
    pub(crate) removed_count: usize,
    pub(crate) hints: HintBudget,
    pub(crate) revealed: bool,
}

impl Board {
    /// Create an empty board where every cell is editable.
    pub fn new(size: GridSize) -> Self {
        let n = size.cells();
        Self {
            size,
            values: vec![vec![0; n]; n],
            answers: vec![vec![0; n]; n],
            editable: vec![vec![true; n]; n],
            removed_count: 0,
            hints: HintBudget::default(),
            revealed: false,
        }
    }

    pub(crate) fn from_parts(
        size: GridSize,
        values: Vec<Vec<u8>>,
        editable: Vec<Vec<bool>>,
        answers: Vec<Vec<u8>>,
        removed_count: usize,
        hints: HintBudget,
    ) -> Self {
        Self {
            size,
            values,
            answers,
            editable,
            removed_count,
            hints,
            revealed: false,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Current value at (row, col); `0` for an empty cell.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.values[row][col]
    }

    /// Solved value at (row, col).
    pub fn answer(&self, row: usize, col: usize) -> u8 {
        self.answers[row][col]
    }

    pub fn is_editable(&self, row: usize, col: usize) -> bool {
        self.editable[row][col]
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.values[row][col] == 0
    }

    /// Write `value` into an editable cell. `0` clears the cell.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), InvalidMove> {
        if value as usize > self.size.cells() {
            return Err(InvalidMove::ValueOutOfRange { value });
        }
        if !self.editable[row][col] {
            return Err(InvalidMove::LockedCell { row, col });
        }
        self.values[row][col] = value;
        Ok(())
    }

    /// Fill every cell with its answer and lock the whole board. This
    /// ends active play for the puzzle.
    pub fn reveal(&mut self) {
        self.values = self.answers.clone();
        for row in &mut self.editable {
            row.fill(false);
        }
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of cells blanked when the puzzle was created.
    pub fn removed_count(&self) -> usize {
        self.removed_count
    }

    pub fn hints(&self) -> HintBudget {
        self.hints
    }
}
