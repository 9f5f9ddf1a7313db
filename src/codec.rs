use std::error::Error;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::Lines;

use log::debug;

use crate::board::{Board, GridSize, HintBudget};

/// A malformed save file. Each variant names the section that failed,
/// so the frontend can tell the player what is wrong with the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The named section header (or its line) is absent or mislabeled.
    MissingSection(&'static str),
    /// A token in the named section is not an integer.
    BadInteger { section: &'static str, token: String },
    /// The grid side length has no integer block size.
    UnsupportedGridSize(usize),
    /// The stored block size does not match the grid size.
    BlockSizeMismatch { expected: usize, found: usize },
    /// A grid row does not hold exactly N tokens.
    RowLength { section: &'static str, row: usize },
    /// A cell value is outside the range the section allows.
    ValueOutOfRange {
        section: &'static str,
        row: usize,
        col: usize,
    },
    /// The hint counter exceeds the hint budget.
    BadHintCounts { used: usize, max: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingSection(section) => {
                write!(f, "missing '{section}' section")
            }
            FormatError::BadInteger { section, token } => {
                write!(f, "'{section}' section holds a non-integer token '{token}'")
            }
            FormatError::UnsupportedGridSize(n) => {
                write!(f, "unsupported grid size {n}")
            }
            FormatError::BlockSizeMismatch { expected, found } => {
                write!(f, "block size {found} does not match the grid (expected {expected})")
            }
            FormatError::RowLength { section, row } => {
                write!(f, "'{section}' section row {row} has the wrong number of cells")
            }
            FormatError::ValueOutOfRange { section, row, col } => {
                write!(f, "'{section}' section cell ({row}, {col}) is out of range")
            }
            FormatError::BadHintCounts { used, max } => {
                write!(f, "hint counter {used}/{max} exceeds the budget")
            }
        }
    }
}

impl Error for FormatError {}

/// Serialize the board to the flat text save layout.
pub fn encode(board: &Board) -> String {
    let n = board.size().cells();
    let mut lines: Vec<String> = Vec::with_capacity(3 * n + 7);

    lines.push(format!("Grid Size : {n}"));
    lines.push(format!("Mini Grid Size : {}", board.size().block()));

    lines.push("Saved grid".to_string());
    push_rows(&mut lines, n, |r, c| board.get(r, c));
    lines.push("Editable".to_string());
    // 1 marks a locked cell.
    push_rows(&mut lines, n, |r, c| u8::from(!board.is_editable(r, c)));
    lines.push("Answer".to_string());
    push_rows(&mut lines, n, |r, c| board.answer(r, c));

    let hints = board.hints();
    lines.push(format!("Hints {}/{}", hints.used, hints.max));
    lines.push(format!(
        "Difficulty : {}",
        board.removed_count().saturating_sub(hints.used)
    ));

    lines.join("\n")
}

fn push_rows(lines: &mut Vec<String>, n: usize, cell: impl Fn(usize, usize) -> u8) {
    for r in 0..n {
        let row: Vec<String> = (0..n).map(|c| cell(r, c).to_string()).collect();
        lines.push(row.join(" "));
    }
}

/// Parse a board from the flat text save layout. Sections are read in
/// a fixed order and fully validated; on any error no board is built.
pub fn decode(text: &str) -> Result<Board, FormatError> {
    let mut lines = text.lines();

    let n = header_number(&mut lines, "Grid Size")?;
    let size = GridSize::from_cells(n).ok_or(FormatError::UnsupportedGridSize(n))?;
    let block = header_number(&mut lines, "Mini Grid Size")?;
    if block != size.block() {
        return Err(FormatError::BlockSizeMismatch {
            expected: size.block(),
            found: block,
        });
    }

    expect_section(&mut lines, "Saved grid")?;
    let values = rows(&mut lines, "Saved grid", n, 0, n as u8)?;
    expect_section(&mut lines, "Editable")?;
    let locked = rows(&mut lines, "Editable", n, 0, 1)?;
    expect_section(&mut lines, "Answer")?;
    let answers = rows(&mut lines, "Answer", n, 1, n as u8)?;

    let hints = hint_line(&mut lines)?;
    // The trailing line stores removed_count - used, so the removal
    // count comes back by adding the used hints.
    let removed_count = hints.used + header_number(&mut lines, "Difficulty")?;

    let editable = locked
        .into_iter()
        .map(|row| row.into_iter().map(|flag| flag == 0).collect())
        .collect();

    Ok(Board::from_parts(
        size,
        values,
        editable,
        answers,
        removed_count,
        hints,
    ))
}

/// Serialize and write atomically: the full text goes to a sibling
/// temp file which is then renamed over the target, so a failure
/// mid-write never leaves a truncated save behind.
pub fn save_file(board: &Board, path: &Path) -> Result<(), Box<dyn Error>> {
    let text = encode(board);

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let file = File::create(&tmp)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    fs::rename(&tmp, path)?;
    debug!("saved game to {path:?}");
    Ok(())
}

/// Read and parse a saved game.
pub fn load_file(path: &Path) -> Result<Board, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let board = decode(&text)?;
    debug!("loaded game from {path:?}");
    Ok(board)
}

fn header_number(lines: &mut Lines<'_>, section: &'static str) -> Result<usize, FormatError> {
    let line = lines.next().ok_or(FormatError::MissingSection(section))?;
    let rest = line
        .strip_prefix(section)
        .and_then(|rest| rest.trim_start().strip_prefix(':'))
        .ok_or(FormatError::MissingSection(section))?;
    let token = rest.trim();
    token.parse().map_err(|_| FormatError::BadInteger {
        section,
        token: token.to_string(),
    })
}

fn expect_section(lines: &mut Lines<'_>, section: &'static str) -> Result<(), FormatError> {
    match lines.next() {
        Some(line) if line.trim() == section => Ok(()),
        _ => Err(FormatError::MissingSection(section)),
    }
}

fn rows(
    lines: &mut Lines<'_>,
    section: &'static str,
    n: usize,
    min: u8,
    max: u8,
) -> Result<Vec<Vec<u8>>, FormatError> {
    let mut grid: Vec<Vec<u8>> = Vec::with_capacity(n);
    for row in 0..n {
        let line = lines.next().ok_or(FormatError::MissingSection(section))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(FormatError::RowLength { section, row });
        }
        let mut cells: Vec<u8> = Vec::with_capacity(n);
        for (col, token) in tokens.iter().enumerate() {
            let value: u8 = token.parse().map_err(|_| FormatError::BadInteger {
                section,
                token: token.to_string(),
            })?;
            if value < min || value > max {
                return Err(FormatError::ValueOutOfRange { section, row, col });
            }
            cells.push(value);
        }
        grid.push(cells);
    }
    Ok(grid)
}

fn hint_line(lines: &mut Lines<'_>) -> Result<HintBudget, FormatError> {
    let line = lines.next().ok_or(FormatError::MissingSection("Hints"))?;
    let rest = line
        .strip_prefix("Hints")
        .ok_or(FormatError::MissingSection("Hints"))?
        .trim();
    let (used, max) = rest.split_once('/').ok_or(FormatError::MissingSection("Hints"))?;
    let used: usize = used.trim().parse().map_err(|_| FormatError::BadInteger {
        section: "Hints",
        token: used.to_string(),
    })?;
    let max: usize = max.trim().parse().map_err(|_| FormatError::BadInteger {
        section: "Hints",
        token: max.to_string(),
    })?;
    if used > max {
        return Err(FormatError::BadHintCounts { used, max });
    }
    Ok(HintBudget { used, max })
}
