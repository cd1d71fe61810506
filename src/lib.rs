//! Word Garden
//!
//! Terminal word games: a Wordle-style guessing game with persisted statistics
//! and a multiple-choice vocabulary quiz.
//!
//! # Quick Start
//!
//! ```rust
//! use word_garden::core::Word;
//! use word_garden::game::{AnyWord, Session, Submission};
//! use word_garden::stats::{MemoryStorage, StatsStore};
//!
//! let mut session = Session::new(Word::new("crane").unwrap(), AnyWord);
//! let mut stats = StatsStore::new(MemoryStorage::new());
//!
//! for ch in "crane".chars() {
//!     session.input_letter(ch).unwrap();
//! }
//! let submission = session.submit(&mut stats).unwrap();
//!
//! assert!(matches!(submission, Submission::Won { attempts: 1, .. }));
//! assert_eq!(stats.record().wins(1), 1);
//! ```

// Core domain types
pub mod core;

// Session state machine and guess validation
pub mod game;

// Persisted statistics
pub mod stats;

// Vocabulary quiz
pub mod quiz;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
