//! Command implementations for the CLI

mod ranking;
mod simple;
mod stats;

pub use ranking::run_ranking;
pub use simple::run_simple;
pub use stats::run_stats;
