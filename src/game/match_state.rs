//! Match state machine
//!
//! One `Match` owns the hidden solution, the submitted guess history, the
//! 6x5 board of classifications, the aggregate keyboard state, the current
//! input buffer, and the match status. Every operation is a pure, immediate
//! state transition with no I/O; presentation timing and stats reporting
//! belong to the callers.

use crate::core::{CellState, RowStates, WORD_LEN, Word, WordError, evaluate_row, is_game_letter};
use crate::game::keyboard::KeyboardState;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Maximum number of guesses per match
pub const MAX_GUESSES: usize = 6;

/// Match status: `Playing` until the match ends, then frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    /// A match in a terminal state accepts no further input
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A key event from the virtual keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A letter key; anything outside the alphabet is rejected silently
    Letter(char),
    /// Remove the last buffered letter
    Delete,
    /// Submit the current buffer as a guess
    Enter,
}

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Fewer than 5 letters in the buffer; nothing was mutated
    Incomplete,
    /// The match already ended; nothing was mutated
    MatchOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "La palabra debe tener {WORD_LEN} letras"),
            Self::MatchOver => write!(f, "La partida ya termin\u{f3}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// What a key press did to the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Buffer changed (letter appended or deleted)
    Edited,
    /// Key had no effect (terminal state, full/empty buffer, unknown letter)
    Ignored,
    /// Enter pressed with an incomplete buffer; state untouched
    Incomplete,
    /// A full guess was evaluated and committed
    Submitted(Submission),
}

/// The committed result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Board row index the guess landed in (0-5)
    pub row_index: usize,
    /// Per-cell classification of the guess
    pub row: RowStates,
    /// Match status after this guess
    pub status: Status,
}

/// One complete play-through from solution selection to a terminal state
#[derive(Debug, Clone)]
pub struct Match {
    solution: Word,
    guesses: Vec<Word>,
    board: [RowStates; MAX_GUESSES],
    keyboard: KeyboardState,
    status: Status,
    buffer: Vec<char>,
}

impl Match {
    /// Start a match with a solution chosen uniformly at random
    ///
    /// Returns `None` when the word list is empty; the caller treats that as
    /// a fatal startup condition.
    #[must_use]
    pub fn start(words: &[Word]) -> Option<Self> {
        words.choose(&mut rand::rng()).cloned().map(Self::with_solution)
    }

    /// Start a match with a known solution (tests, replays)
    #[must_use]
    pub fn with_solution(solution: Word) -> Self {
        Self {
            solution,
            guesses: Vec::new(),
            board: [[CellState::Default; WORD_LEN]; MAX_GUESSES],
            keyboard: KeyboardState::new(),
            status: Status::Playing,
            buffer: Vec::new(),
        }
    }

    /// The hidden solution word
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    /// Submitted guesses, in order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The full 6x5 classification grid; unsubmitted rows are all `Default`
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &[RowStates; MAX_GUESSES] {
        &self.board
    }

    /// Aggregate per-letter keyboard classification
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The in-progress guess, 0-5 letters
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// Number of guesses used so far (1-6 once terminal)
    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.guesses.len()
    }

    /// Feed one key event through the match
    ///
    /// This is the engine's whole input surface: letters, `Delete`, `Enter`.
    /// Any key on a finished match is ignored; the match stays frozen until
    /// the caller starts a fresh one.
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        if self.status.is_terminal() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(ch) => self.append_letter(ch),
            Key::Delete => self.delete_letter(),
            Key::Enter => match self.submit_guess() {
                Ok(submission) => KeyOutcome::Submitted(submission),
                Err(SubmitError::Incomplete) => KeyOutcome::Incomplete,
                Err(SubmitError::MatchOver) => KeyOutcome::Ignored,
            },
        }
    }

    /// Append a letter to the input buffer
    ///
    /// No-op when the buffer is full or the character is not a letter of
    /// the alphabet. Lowercase input is accepted and uppercased.
    fn append_letter(&mut self, ch: char) -> KeyOutcome {
        let ch = ch.to_uppercase().next().unwrap_or(ch);
        if !is_game_letter(ch) || self.buffer.len() >= WORD_LEN {
            return KeyOutcome::Ignored;
        }
        self.buffer.push(ch);
        KeyOutcome::Edited
    }

    /// Remove the last buffered letter; never touches submitted rows
    fn delete_letter(&mut self) -> KeyOutcome {
        if self.buffer.pop().is_some() {
            KeyOutcome::Edited
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Evaluate and commit the buffered guess
    ///
    /// On success the row and its classification are appended, the keyboard
    /// merged under precedence, the buffer cleared, and the status updated:
    /// `Won` on an exact match, `Lost` when the sixth non-winning guess
    /// lands, `Playing` otherwise.
    ///
    /// # Errors
    /// `SubmitError::Incomplete` when the buffer holds fewer than 5 letters,
    /// `SubmitError::MatchOver` when the match already ended. Neither
    /// mutates any state.
    pub fn submit_guess(&mut self) -> Result<Submission, SubmitError> {
        if self.status.is_terminal() {
            return Err(SubmitError::MatchOver);
        }
        if self.buffer.len() < WORD_LEN {
            return Err(SubmitError::Incomplete);
        }

        let text: String = self.buffer.iter().collect();
        let guess = Word::new(&text).map_err(|_: WordError| SubmitError::Incomplete)?;

        let row = evaluate_row(&guess, &self.solution);
        let row_index = self.guesses.len();
        self.board[row_index] = row;
        self.keyboard.merge_row(&guess, &row);

        let won = guess == self.solution;
        self.guesses.push(guess);
        self.buffer.clear();

        self.status = if won {
            Status::Won
        } else if self.guesses.len() == MAX_GUESSES {
            Status::Lost
        } else {
            Status::Playing
        };

        Ok(Submission {
            row_index,
            row,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn type_word(m: &mut Match, s: &str) {
        for ch in s.chars() {
            m.press(Key::Letter(ch));
        }
    }

    fn play_guess(m: &mut Match, s: &str) -> KeyOutcome {
        type_word(m, s);
        m.press(Key::Enter)
    }

    #[test]
    fn fresh_match_is_empty() {
        let m = Match::with_solution(word("GATOS"));
        assert_eq!(m.status(), Status::Playing);
        assert!(m.guesses().is_empty());
        assert!(m.buffer().is_empty());
        assert_eq!(m.board(), &[[CellState::Default; WORD_LEN]; MAX_GUESSES]);
    }

    #[test]
    fn start_picks_from_list() {
        let words = vec![word("GATOS")];
        let m = Match::start(&words).unwrap();
        assert_eq!(m.solution(), &word("GATOS"));
    }

    #[test]
    fn start_empty_list_is_none() {
        assert!(Match::start(&[]).is_none());
    }

    #[test]
    fn letters_fill_the_buffer() {
        let mut m = Match::with_solution(word("GATOS"));
        assert_eq!(m.press(Key::Letter('t')), KeyOutcome::Edited);
        assert_eq!(m.press(Key::Letter('A')), KeyOutcome::Edited);
        assert_eq!(m.buffer(), &['T', 'A']);
    }

    #[test]
    fn buffer_caps_at_five_letters() {
        let mut m = Match::with_solution(word("GATOS"));
        type_word(&mut m, "TANGO");
        assert_eq!(m.press(Key::Letter('S')), KeyOutcome::Ignored);
        assert_eq!(m.buffer().len(), WORD_LEN);
    }

    #[test]
    fn unrecognized_keys_ignored_silently() {
        let mut m = Match::with_solution(word("GATOS"));
        assert_eq!(m.press(Key::Letter('3')), KeyOutcome::Ignored);
        assert_eq!(m.press(Key::Letter('!')), KeyOutcome::Ignored);
        assert_eq!(m.press(Key::Letter(' ')), KeyOutcome::Ignored);
        assert!(m.buffer().is_empty());
    }

    #[test]
    fn delete_pops_and_bottoms_out() {
        let mut m = Match::with_solution(word("GATOS"));
        type_word(&mut m, "TA");
        assert_eq!(m.press(Key::Delete), KeyOutcome::Edited);
        assert_eq!(m.buffer(), &['T']);
        assert_eq!(m.press(Key::Delete), KeyOutcome::Edited);
        assert_eq!(m.press(Key::Delete), KeyOutcome::Ignored);
        assert!(m.buffer().is_empty());
    }

    #[test]
    fn incomplete_submit_mutates_nothing() {
        let mut m = Match::with_solution(word("GATOS"));
        type_word(&mut m, "TAN");
        let before = m.clone();

        assert_eq!(m.press(Key::Enter), KeyOutcome::Incomplete);

        assert_eq!(m.buffer(), before.buffer());
        assert_eq!(m.guesses(), before.guesses());
        assert_eq!(m.board(), before.board());
        assert_eq!(m.keyboard(), before.keyboard());
        assert_eq!(m.status(), Status::Playing);
    }

    #[test]
    fn winning_guess_ends_the_match() {
        let mut m = Match::with_solution(word("GATOS"));
        let outcome = play_guess(&mut m, "GATOS");

        let KeyOutcome::Submitted(sub) = outcome else {
            panic!("expected submission, got {outcome:?}");
        };
        assert_eq!(sub.row_index, 0);
        assert_eq!(sub.row, [CellState::Correct; WORD_LEN]);
        assert_eq!(sub.status, Status::Won);
        assert_eq!(m.status(), Status::Won);
        assert_eq!(m.guesses_used(), 1);
        assert!(m.buffer().is_empty());
    }

    #[test]
    fn won_iff_guess_equals_solution() {
        let mut m = Match::with_solution(word("GATOS"));
        play_guess(&mut m, "TOGAS");
        assert_eq!(m.status(), Status::Playing);
        play_guess(&mut m, "GATOS");
        assert_eq!(m.status(), Status::Won);
    }

    #[test]
    fn six_misses_lose_exactly_on_the_sixth() {
        let mut m = Match::with_solution(word("GATOS"));
        for (i, guess) in ["PERRO", "DULCE", "TANGO", "MUNDO", "FLORA"]
            .iter()
            .enumerate()
        {
            play_guess(&mut m, guess);
            assert_eq!(m.status(), Status::Playing, "still playing after {}", i + 1);
        }
        play_guess(&mut m, "BRISA");
        assert_eq!(m.status(), Status::Lost);
        assert_eq!(m.guesses_used(), MAX_GUESSES);
    }

    #[test]
    fn terminal_match_ignores_every_key() {
        let mut m = Match::with_solution(word("GATOS"));
        play_guess(&mut m, "GATOS");

        assert_eq!(m.press(Key::Letter('A')), KeyOutcome::Ignored);
        assert_eq!(m.press(Key::Delete), KeyOutcome::Ignored);
        assert_eq!(m.press(Key::Enter), KeyOutcome::Ignored);
        assert_eq!(m.guesses_used(), 1);
        assert_eq!(m.submit_guess(), Err(SubmitError::MatchOver));
    }

    #[test]
    fn board_rows_match_submitted_guesses() {
        let mut m = Match::with_solution(word("PERRO"));
        play_guess(&mut m, "RULOS");

        use CellState::{Absent, Default, Present};
        assert_eq!(m.board()[0], [Present, Absent, Absent, Present, Absent]);
        assert_eq!(m.board()[1], [Default; WORD_LEN]);
        assert_eq!(m.guesses(), &[word("RULOS")]);
    }

    #[test]
    fn grid_is_a_pure_function_of_history() {
        // Replaying the same guesses against the same solution reproduces
        // the same grid and keyboard
        let play = |solution: &str, guesses: &[&str]| {
            let mut m = Match::with_solution(word(solution));
            for g in guesses {
                play_guess(&mut m, g);
            }
            m
        };

        let a = play("GATOS", &["PERRO", "TOGAS", "MATES"]);
        let b = play("GATOS", &["PERRO", "TOGAS", "MATES"]);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.keyboard(), b.keyboard());
        assert_eq!(a.status(), b.status());
    }

    #[test]
    fn keyboard_reflects_best_classification() {
        let mut m = Match::with_solution(word("GATOS"));
        play_guess(&mut m, "ALETA"); // A present
        assert_eq!(m.keyboard().state_of('A'), CellState::Present);
        play_guess(&mut m, "GAJOS"); // A correct
        assert_eq!(m.keyboard().state_of('A'), CellState::Correct);
        play_guess(&mut m, "TRAJE"); // A merely present again
        assert_eq!(m.keyboard().state_of('A'), CellState::Correct);
    }

    #[test]
    fn restart_is_a_fresh_match() {
        let mut m = Match::with_solution(word("GATOS"));
        play_guess(&mut m, "PERRO");
        type_word(&mut m, "TA");

        // Restart = caller builds a new match; nothing carries over
        let words = vec![word("TANGO")];
        let fresh = Match::start(&words).unwrap();
        assert_eq!(fresh.status(), Status::Playing);
        assert!(fresh.guesses().is_empty());
        assert!(fresh.buffer().is_empty());
        assert_eq!(fresh.board(), &[[CellState::Default; WORD_LEN]; MAX_GUESSES]);
        assert_eq!(fresh.keyboard(), &KeyboardState::new());
    }

    #[test]
    fn enye_playable_end_to_end() {
        let mut m = Match::with_solution(word("\u{d1}OQUI"));
        play_guess(&mut m, "\u{f1}oqui"); // lowercase ñ accepted
        assert_eq!(m.status(), Status::Won);
    }
}
