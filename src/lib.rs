pub mod board;
pub mod codec;
pub mod difficulty;
pub mod generator;
pub mod hint;
pub mod progress;
pub mod validation;

pub use board::{Board, GridSize, HintBudget, InvalidMove};
pub use codec::{FormatError, decode, encode, load_file, save_file};
pub use difficulty::Difficulty;
pub use generator::{
    CustomGameError, GenerationError, RANDOM_MODE_HINTS, fill, remove_custom,
    remove_for_difficulty,
};
pub use hint::{HintOutcome, reveal_hint};
pub use progress::{check_win, progress};
pub use validation::{can_place, is_solved};
