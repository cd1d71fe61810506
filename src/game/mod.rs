//! Guessing game session
//!
//! The session state machine, its input keys and the pluggable guess validator.

mod error;
mod input;
mod session;
mod validator;

pub use error::GameError;
pub use input::Key;
pub use session::{
    Board, Cell, MAX_ATTEMPTS, OutcomeRecorder, Session, SessionState, Submission,
};
pub use validator::{AnyWord, GuessValidator, Validator, WordListValidator};
