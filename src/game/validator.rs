//! Guess validation at submit time
//!
//! The default validator accepts any five alphabetic letters. A dictionary
//! check can be plugged in without touching the session.

use super::GameError;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Decides whether an assembled guess may be submitted
pub trait GuessValidator {
    /// Validate the typed guess and turn it into a `Word`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidGuessFormat` for malformed input, or
    /// `GameError::NotInWordList` when a dictionary rejects it.
    fn validate(&self, guess: &str) -> Result<Word, GameError>;
}

/// Accepts any 5-letter alphabetic guess
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWord;

impl GuessValidator for AnyWord {
    fn validate(&self, guess: &str) -> Result<Word, GameError> {
        Word::new(guess).map_err(|_| GameError::InvalidGuessFormat(guess.to_string()))
    }
}

/// Accepts only guesses found in a word list
#[derive(Debug, Clone, Default)]
pub struct WordListValidator {
    words: FxHashSet<Word>,
}

impl WordListValidator {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Add a word to the accepted set; returns false if it was already there
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl GuessValidator for WordListValidator {
    fn validate(&self, guess: &str) -> Result<Word, GameError> {
        let word = AnyWord.validate(guess)?;
        if self.words.contains(&word) {
            Ok(word)
        } else {
            Err(GameError::NotInWordList(word.to_string()))
        }
    }
}

/// Runtime choice between validators, dispatched statically
pub enum Validator {
    Any(AnyWord),
    WordList(WordListValidator),
}

impl Validator {
    /// Build the validator for a game over `solutions`
    ///
    /// In strict mode only listed words are accepted. A fixed solution is
    /// always accepted as a guess, even when it is not in the list, so the
    /// game stays winnable.
    #[must_use]
    pub fn for_game(strict: bool, solutions: &[Word], fixed_solution: Option<Word>) -> Self {
        if !strict {
            return Self::Any(AnyWord);
        }
        let mut list = WordListValidator::new(solutions);
        if let Some(word) = fixed_solution {
            list.insert(word);
        }
        Self::WordList(list)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::Any(AnyWord)
    }
}

impl GuessValidator for Validator {
    fn validate(&self, guess: &str) -> Result<Word, GameError> {
        match self {
            Self::Any(v) => v.validate(guess),
            Self::WordList(v) => v.validate(guess),
        }
    }
}
