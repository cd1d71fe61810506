//! Errors raised by board input and guess submission
//!
//! None of these are fatal: the session is left unchanged and the caller
//! decides whether to show a message.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A key that is not a letter A-Z
    InvalidInput(char),
    /// The current row already holds five letters
    RowFull,
    /// The session has reached `Won` or `Lost`
    GameOver,
    /// Submit with fewer than five letters on the row
    PrematureSubmit { letters: usize },
    /// The assembled guess is not five alphabetic letters
    InvalidGuessFormat(String),
    /// The guess is well-formed but rejected by a dictionary check
    NotInWordList(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(ch) => write!(f, "'{ch}' is not a letter"),
            Self::RowFull => write!(f, "Row is full, press Enter to submit"),
            Self::GameOver => write!(f, "Game is over, start a new one"),
            Self::PrematureSubmit { letters } => {
                write!(f, "Not enough letters ({letters}/5)")
            }
            Self::InvalidGuessFormat(guess) => {
                write!(f, "'{guess}' is not a 5-letter word")
            }
            Self::NotInWordList(guess) => {
                write!(f, "Guess not in word list: {guess}. Try another 5-letter word.")
            }
        }
    }
}

impl std::error::Error for GameError {}
