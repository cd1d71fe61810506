//! Core domain types for the guessing game
//!
//! Pure types with no I/O: words, guess feedback and keyboard aggregation.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, Outcome};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use word::{WORD_LEN, Word, WordError};
