//! Virtual keyboard letter classification
//!
//! Tracks the best classification seen for each letter of the alphabet
//! across every submitted guess of the current match. Classifications only
//! ever improve: `Correct` is never downgraded by a later `Present` or
//! `Absent`.

use crate::core::{CellState, RowStates, Word};
use rustc_hash::FxHashMap;

/// The 27 letters of the game alphabet in QWERTY keyboard order
pub const ALPHABET: [char; 27] = [
    'Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', 'A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L',
    '\u{d1}', 'Z', 'X', 'C', 'V', 'B', 'N', 'M',
];

/// Best-known classification per letter, shown on the virtual keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    states: FxHashMap<char, CellState>,
}

impl KeyboardState {
    /// All letters start at `Default`
    #[must_use]
    pub fn new() -> Self {
        let states = ALPHABET
            .iter()
            .map(|&ch| (ch, CellState::Default))
            .collect();
        Self { states }
    }

    /// Current classification for a letter
    ///
    /// Letters outside the alphabet read as `Default`.
    #[inline]
    #[must_use]
    pub fn state_of(&self, letter: char) -> CellState {
        self.states
            .get(&letter)
            .copied()
            .unwrap_or(CellState::Default)
    }

    /// Merge one evaluated guess row into the keyboard
    ///
    /// Each letter takes the higher-precedence classification of its current
    /// value and the cell it produced. The whole row is already evaluated
    /// when this runs, so an `Absent` cell for a letter that also scored
    /// `Present` or `Correct` elsewhere in the same row cannot clobber the
    /// better mark.
    pub fn merge_row(&mut self, guess: &Word, row: &RowStates) {
        for (i, &cell) in row.iter().enumerate() {
            let letter = guess.letter_at(i);
            let entry = self.states.entry(letter).or_insert(CellState::Default);
            *entry = entry.merge(cell);
        }
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_row;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn alphabet_has_27_letters_including_enye() {
        assert_eq!(ALPHABET.len(), 27);
        assert!(ALPHABET.contains(&'\u{d1}'));
        assert!(ALPHABET.contains(&'A'));
        assert!(ALPHABET.contains(&'Z'));
    }

    #[test]
    fn fresh_keyboard_all_default() {
        let kb = KeyboardState::new();
        for &ch in &ALPHABET {
            assert_eq!(kb.state_of(ch), CellState::Default);
        }
    }

    #[test]
    fn merge_sets_classifications() {
        let mut kb = KeyboardState::new();
        let solution = word("PERRO");
        let guess = word("RULOS");
        kb.merge_row(&guess, &evaluate_row(&guess, &solution));

        assert_eq!(kb.state_of('R'), CellState::Present);
        assert_eq!(kb.state_of('U'), CellState::Absent);
        assert_eq!(kb.state_of('L'), CellState::Absent);
        assert_eq!(kb.state_of('O'), CellState::Present);
        assert_eq!(kb.state_of('S'), CellState::Absent);
        // Untouched letters stay default
        assert_eq!(kb.state_of('Q'), CellState::Default);
    }

    #[test]
    fn correct_never_downgraded_across_guesses() {
        let mut kb = KeyboardState::new();
        let solution = word("GATOS");

        // A scores present first
        let g1 = word("ALETA");
        kb.merge_row(&g1, &evaluate_row(&g1, &solution));
        assert_eq!(kb.state_of('A'), CellState::Present);

        // Then correct
        let g2 = word("GAJOS");
        kb.merge_row(&g2, &evaluate_row(&g2, &solution));
        assert_eq!(kb.state_of('A'), CellState::Correct);

        // A later row where A is merely present cannot pull it back down
        let g3 = word("TRAJE");
        kb.merge_row(&g3, &evaluate_row(&g3, &solution));
        assert_eq!(kb.state_of('A'), CellState::Correct);
    }

    #[test]
    fn duplicate_letter_row_merges_cleanly() {
        let mut kb = KeyboardState::new();
        // Solution TANGO has one O; guess TONOS carries two. Both cells read
        // Present (presence is not capped), and the merge lands on Present.
        // The rank merge also guards the impossible downgrade path where an
        // Absent cell would follow a better mark for the same letter.
        let solution = word("TANGO");
        let guess = word("TONOS");
        kb.merge_row(&guess, &evaluate_row(&guess, &solution));
        assert_eq!(kb.state_of('O'), CellState::Present);
        assert_eq!(kb.state_of('T'), CellState::Correct);
    }
}
