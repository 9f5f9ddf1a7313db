use serde::{Deserialize, Serialize};

use crate::board::GridSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
    /// Anywhere across the full Easy..Extreme span.
    Random,
}

impl Difficulty {
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
            Difficulty::Random => "Random",
        }
    }

    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Extreme,
            Difficulty::Random,
        ]
    }

    /// Inclusive range of cells to remove for this difficulty on the
    /// given grid size.
    ///
    /// The bands are percentages of `N*N - 1`: Easy starts at 25%,
    /// Medium at 35%, Hard at 45%, Extreme at 60%, and Extreme tops out
    /// at 80%. The bounds are computed in floating point and truncated
    /// at use, so adjacent bands stay contiguous on every grid size.
    pub fn removal_range(&self, size: GridSize) -> (usize, usize) {
        let n = size.cells();
        let limit = (n * n - 1) as f64;

        let easy = (limit * 0.25, limit * 0.35 - 1.0);
        let medium = (easy.1 + 1.0, limit * 0.45 - 1.0);
        let hard = (medium.1 + 1.0, limit * 0.60 - 1.0);
        let extreme = (hard.1 + 1.0, limit * 0.80);

        let (lo, hi) = match self {
            Difficulty::Easy => easy,
            Difficulty::Medium => medium,
            Difficulty::Hard => hard,
            Difficulty::Extreme => extreme,
            Difficulty::Random => (easy.0, extreme.1),
        };
        (lo as usize, hi as usize)
    }
}
