//! Formatting utilities for terminal output

use crate::core::Outcome;
use crate::game::Cell;
use colored::{ColoredString, Colorize};

/// Format a letter tile colored by its outcome
#[must_use]
pub fn tile(letter: char, outcome: Option<Outcome>) -> ColoredString {
    let text = format!(" {letter} ");
    match outcome {
        Some(Outcome::Correct) => text.black().on_green().bold(),
        Some(Outcome::Present) => text.black().on_yellow().bold(),
        Some(Outcome::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Format one board row as colored tiles; empty cells show as dots
#[must_use]
pub fn board_row(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| {
            let letter = cell.letter.map_or('·', char::from);
            tile(letter, cell.outcome).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn board_row_contains_letters() {
        colored::control::set_override(false);
        let cells = [
            Cell {
                letter: Some(b'A'),
                outcome: Some(Outcome::Correct),
            },
            Cell::default(),
        ];
        assert_eq!(board_row(&cells), " A   · ");
    }
}
