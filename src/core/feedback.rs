//! Guess feedback classification
//!
//! Evaluates a submitted guess against the hidden solution, producing one
//! `CellState` per position. Classification runs in two passes:
//! exact-position matches first, then presence checks for the remaining
//! positions. A letter counts as present if it occurs anywhere in the
//! solution; present marks are not capped by how many occurrences remain
//! unclaimed by exact matches (see `evaluate_row` docs).

use super::word::{WORD_LEN, Word};

/// Classification of a single board cell or keyboard letter
///
/// Ordered by precedence: `Correct` beats `Present` beats `Absent` beats
/// `Default`. A letter's keyboard classification only ever moves up this
/// ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Not yet evaluated
    #[default]
    Default,
    /// Letter does not occur in the solution
    Absent,
    /// Letter occurs in the solution, but not at this position
    Present,
    /// Letter matches the solution at this position
    Correct,
}

impl CellState {
    /// Precedence rank: higher never gets overwritten by lower
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Merge under precedence: keep whichever classification ranks higher
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }
}

/// One evaluated row of the board
pub type RowStates = [CellState; WORD_LEN];

/// Evaluate a guess against the solution
///
/// Pure function: the same `(guess, solution)` pair always yields the same
/// row. Pass one marks every exact-position match `Correct`. Pass two marks
/// each remaining position `Present` when its letter occurs anywhere in the
/// solution, `Absent` otherwise.
///
/// Present marks are deliberately not limited to unconsumed solution
/// letters, so a guess whose letters all occur in the solution comes back
/// with no `Absent` cells even when a letter is duplicated. TOGAS against
/// GATOS is five `Present` cells.
///
/// # Examples
/// ```
/// use wordle_argentino::core::{CellState, Word, evaluate_row};
///
/// let solution = Word::new("GATOS").unwrap();
/// let guess = Word::new("GATOS").unwrap();
/// assert_eq!(evaluate_row(&guess, &solution), [CellState::Correct; 5]);
/// ```
#[must_use]
pub fn evaluate_row(guess: &Word, solution: &Word) -> RowStates {
    let mut row = [CellState::Absent; WORD_LEN];

    // First pass: exact-position matches
    for i in 0..WORD_LEN {
        if guess.letter_at(i) == solution.letter_at(i) {
            row[i] = CellState::Correct;
        }
    }

    // Second pass: presence anywhere in the solution
    for i in 0..WORD_LEN {
        if row[i] != CellState::Correct && solution.has_letter(guess.letter_at(i)) {
            row[i] = CellState::Present;
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Absent, Correct, Default, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn rank_ordering() {
        assert!(Correct.rank() > Present.rank());
        assert!(Present.rank() > Absent.rank());
        assert!(Absent.rank() > Default.rank());
    }

    #[test]
    fn merge_never_downgrades() {
        assert_eq!(Correct.merge(Present), Correct);
        assert_eq!(Correct.merge(Absent), Correct);
        assert_eq!(Present.merge(Absent), Present);
        assert_eq!(Present.merge(Correct), Correct);
        assert_eq!(Default.merge(Absent), Absent);
        assert_eq!(Absent.merge(Absent), Absent);
    }

    #[test]
    fn exact_match_all_correct() {
        let row = evaluate_row(&word("GATOS"), &word("GATOS"));
        assert_eq!(row, [Correct; 5]);
    }

    #[test]
    fn no_shared_letters_all_absent() {
        let row = evaluate_row(&word("DULCE"), &word("GRANO"));
        assert_eq!(row, [Absent, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn anagram_no_absent_cells() {
        // Every letter of TOGAS occurs in GATOS: four misplaced, the final
        // S sits in place and exact match always wins over presence
        let row = evaluate_row(&word("TOGAS"), &word("GATOS"));
        assert_eq!(row, [Present, Present, Present, Present, Correct]);
    }

    #[test]
    fn mixed_row() {
        // Solution PERRO, guess RULOS:
        // R present, U absent, L absent, O present, S absent
        let row = evaluate_row(&word("RULOS"), &word("PERRO"));
        assert_eq!(row, [Present, Absent, Absent, Present, Absent]);
    }

    #[test]
    fn duplicate_letter_not_capped() {
        // Solution has one R; guess places R correctly at 2 and again at 3.
        // The second R still reads Present because presence is not capped
        // by remaining unconsumed occurrences.
        let row = evaluate_row(&word("PERRO"), &word("CERDO"));
        assert_eq!(row, [Absent, Correct, Correct, Present, Correct]);
    }

    #[test]
    fn enye_participates() {
        let row = evaluate_row(&word("MO\u{d1}OS"), &word("PA\u{d1}OS"));
        assert_eq!(row, [Absent, Present, Correct, Correct, Correct]);
    }

    #[test]
    fn evaluation_is_pure() {
        let guess = word("TOGAS");
        let solution = word("GATOS");
        assert_eq!(
            evaluate_row(&guess, &solution),
            evaluate_row(&guess, &solution)
        );
    }
}
