//! Core domain types for the word game
//!
//! Provides the fundamental types: `Word` (5-letter word over the Spanish
//! alphabet) and `CellState` plus the row evaluation function.

mod feedback;
mod word;

pub use feedback::{CellState, RowStates, evaluate_row};
pub use word::{WORD_LEN, Word, WordError, is_game_letter};
