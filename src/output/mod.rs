//! Terminal output formatting
//!
//! Display utilities for text mode and command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_board, print_keyboard, print_stats};
