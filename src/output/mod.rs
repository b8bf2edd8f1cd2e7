//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_ranking, print_stats};
pub use formatters::{row_to_emoji, row_to_tiles};
