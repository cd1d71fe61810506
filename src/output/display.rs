//! Display functions for game state and command results

use super::formatters::{board_row, create_progress_bar, tile};
use crate::commands::AnalysisResult;
use crate::core::{KEYBOARD_ROWS, KeyboardState};
use crate::game::{GuessValidator, Session};
use crate::stats::StatsRecord;
use colored::Colorize;

/// Print the 6×5 board
pub fn print_board<V: GuessValidator>(session: &Session<V>) {
    for row in session.board() {
        println!("   {}", board_row(row));
    }
}

/// Print the keyboard with each letter colored by its best-known outcome
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|b| tile(char::from(b), keyboard.get(b)).to_string())
            .collect();
        println!("{}{}", " ".repeat(i * 2 + 1), keys.join(""));
    }
}

/// Print the guess distribution
pub fn print_stats(record: &StatsRecord) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());
    println!(
        "   Played: {}   Won: {}   Win rate: {:.0}%",
        record.games_played(),
        record.games_won(),
        record.win_rate()
    );
    println!();

    for row in record.histogram() {
        let bar = create_progress_bar(f64::from(row.width_percent), 100.0, 30);
        let bar = if row.is_failure {
            bar.red()
        } else {
            bar.green()
        };
        println!("   {:>1} {bar} {}", row.label, row.count);
    }
    println!();
}

/// Print the result of a guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible solutions:", result.total_solutions);
    println!("   Feedback groups:  {}", result.buckets.len());
    println!(
        "   Expected remain:  {:.2} solutions",
        result.expected_remaining()
    );
    println!("   Worst case:       {} solutions\n", result.worst_case());

    let max = result.worst_case() as f64;
    for (feedback, count) in result.buckets.iter().take(10) {
        let bar = create_progress_bar(*count as f64, max, 20);
        println!("   {} {} {count}", feedback.to_emoji(), bar.green());
    }
    if result.buckets.len() > 10 {
        println!("   … {} more", result.buckets.len() - 10);
    }
}
