//! Word lists
//!
//! Provides the embedded Argentine-Spanish word list compiled into the
//! binary plus a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{PALABRAS, PALABRAS_COUNT};
