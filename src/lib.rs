//! Wordle Argentino
//!
//! A terminal Wordle localized to Argentine Spanish vocabulary (alphabet A-Z
//! plus \u{d1}), with per-player statistics and a mock ranking.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_argentino::core::Word;
//! use wordle_argentino::game::{Key, Match, Status};
//!
//! let mut game = Match::with_solution(Word::new("GATOS").unwrap());
//! for ch in "GATOS".chars() {
//!     game.press(Key::Letter(ch));
//! }
//! game.press(Key::Enter);
//! assert_eq!(game.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// The guess engine state machine
pub mod game;

// Per-player statistics and persistence
pub mod stats;

// Mock ranking
pub mod leaderboard;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
