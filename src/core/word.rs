//! Word representation
//!
//! A Word stores a 5-letter uppercase word over the Spanish alphabet (A-Z
//! plus Ñ) along with letter position indices for fast lookups. Letters are
//! stored as `char` because Ñ falls outside ASCII.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word and guess
pub const WORD_LEN: usize = 5;

/// A 5-letter word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [char; WORD_LEN],
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidLetter(ch) => {
                write!(f, "Letter '{ch}' is not in the alphabet (A-Z, \u{d1})")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether a character is a letter of the game alphabet
#[inline]
#[must_use]
pub const fn is_game_letter(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch == '\u{d1}'
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is uppercased first, so `"gatos"` and `"GATOS"` are the same
    /// word. Lowercase ñ maps to Ñ.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Any letter falls outside A-Z / Ñ (accented vowels are rejected)
    ///
    /// # Examples
    /// ```
    /// use wordle_argentino::core::Word;
    ///
    /// let word = Word::new("gatos").unwrap();
    /// assert_eq!(word.text(), "GATOS");
    ///
    /// assert!(Word::new("gato").is_err());
    /// assert!(Word::new("gat0s").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().to_uppercase();

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(WordError::InvalidLength(chars.len()));
        }

        let mut letters = ['A'; WORD_LEN];
        for (i, &ch) in chars.iter().enumerate() {
            if !is_game_letter(ch) {
                return Err(WordError::InvalidLetter(ch));
            }
            letters[i] = ch;
        }

        // Build position map for duplicate-aware lookups
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    /// Get the word as a string slice (always uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a letter array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
