//! Vocabulary quiz
//!
//! Multiple-choice definitions for a small deck of words.

mod deck;
mod round;

pub use deck::{VOCABULARY, VocabEntry};
pub use round::{Answer, Question, Quiz, QuizError};
