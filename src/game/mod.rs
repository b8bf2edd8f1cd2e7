//! The guess engine
//!
//! A `Match` consumes raw key events and walks through the
//! playing → won/lost state machine. The engine is synchronous and pure:
//! no I/O, no timers, no knowledge of stats or identity. Callers report
//! terminal outcomes to the stats collaborator and own all presentation
//! timing.

mod keyboard;
mod match_state;

pub use keyboard::{ALPHABET, KeyboardState};
pub use match_state::{Key, KeyOutcome, MAX_GUESSES, Match, Status, SubmitError, Submission};
