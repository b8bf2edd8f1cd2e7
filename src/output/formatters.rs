//! Formatting utilities for terminal output

use crate::core::{CellState, RowStates, Word};
use colored::Colorize;

/// Format an evaluated row as emoji squares
#[must_use]
pub fn row_to_emoji(row: &RowStates) -> String {
    row.iter()
        .map(|cell| match cell {
            CellState::Correct => '\u{1f7e9}',  // Green square
            CellState::Present => '\u{1f7e8}',  // Yellow square
            CellState::Absent => '\u{2b1c}',    // White square
            CellState::Default => '\u{2b1b}',   // Black square
        })
        .collect()
}

/// Format a guess as colored letter tiles
#[must_use]
pub fn row_to_tiles(guess: &Word, row: &RowStates) -> String {
    guess
        .letters()
        .iter()
        .zip(row.iter())
        .map(|(&letter, &cell)| {
            let tile = format!(" {letter} ");
            let tile = match cell {
                CellState::Correct => tile.black().on_green(),
                CellState::Present => tile.black().on_yellow(),
                CellState::Absent => tile.white().on_bright_black(),
                CellState::Default => tile.normal(),
            };
            tile.bold().to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}

/// Win rate as a colored bar over 100%
#[must_use]
pub fn win_rate_bar(win_rate: u32, width: usize) -> String {
    create_progress_bar(f64::from(win_rate), 100.0, width)
}
