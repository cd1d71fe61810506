//! Command implementations

pub mod analyze;
pub mod quiz;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use quiz::{QuizSummary, run_quiz};
pub use simple::{LineOutcome, play_line, run_simple};
