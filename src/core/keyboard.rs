//! Aggregated keyboard state
//!
//! Folds per-letter outcomes from every submitted guess into the best-known
//! classification for each letter. A letter's state never gets weaker.

use super::feedback::{Feedback, Outcome};
use super::word::Word;

/// On-screen keyboard layout, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known outcome for each letter A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<Outcome>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }

    /// Record `outcome` for `letter`, keeping the stronger of the old and new state
    ///
    /// Returns `true` if the stored state changed. Non-letters are ignored.
    pub fn upgrade(&mut self, letter: u8, outcome: Outcome) -> bool {
        let Some(idx) = Self::index(letter) else {
            return false;
        };
        let slot = &mut self.letters[idx];
        if slot.is_some_and(|current| current >= outcome) {
            return false;
        }
        *slot = Some(outcome);
        true
    }

    /// Fold every letter of an evaluated guess
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &outcome) in guess.letters().iter().zip(feedback.outcomes()) {
            self.upgrade(letter, outcome);
        }
    }

    /// Best-known outcome for a letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Outcome> {
        Self::index(letter).and_then(|idx| self.letters[idx])
    }

    /// Iterate over letters that have been guessed, in alphabetical order
    pub fn known(&self) -> impl Iterator<Item = (char, Outcome)> + '_ {
        (b'A'..=b'Z')
            .zip(self.letters.iter())
            .filter_map(|(letter, state)| state.map(|o| (char::from(letter), o)))
    }

    pub fn clear(&mut self) {
        self.letters = [None; 26];
    }
}
