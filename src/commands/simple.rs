//! Simple text mode
//!
//! Line-based game without the TUI: each line is a guess or a `/command`.

use crate::core::Word;
use crate::game::{GameError, GuessValidator, Key, OutcomeRecorder, Session, Submission};
use crate::output::{print_board, print_keyboard, print_stats};
use crate::stats::{Persisted, StatsStorage, StatsStore};
use crate::wordlists::pick_solution;
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Empty,
    Quit,
    NewGame,
    ShowStats,
    Help,
    Submitted(Submission),
    Rejected(GameError),
    UnknownCommand(String),
}

/// Apply one line of input to the session
///
/// A guess line replaces whatever is pending on the current row, is typed
/// letter by letter and then submitted. If any letter is rejected the row is
/// cleared again.
pub fn play_line<V: GuessValidator, R: OutcomeRecorder + ?Sized>(
    session: &mut Session<V>,
    recorder: &mut R,
    line: &str,
) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Empty;
    }

    if let Some(command) = line.strip_prefix('/') {
        return match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => LineOutcome::Quit,
            "new" | "n" => LineOutcome::NewGame,
            "stats" | "s" => LineOutcome::ShowStats,
            "help" | "h" | "?" => LineOutcome::Help,
            other => LineOutcome::UnknownCommand(other.to_string()),
        };
    }

    while session.backspace() {}

    for ch in line.chars() {
        if let Err(e) = session.handle_key(Key::Letter(ch), recorder) {
            while session.backspace() {}
            return LineOutcome::Rejected(e);
        }
    }

    match session.handle_key(Key::Enter, recorder) {
        Ok(Some(submission)) => LineOutcome::Submitted(submission),
        Ok(None) => LineOutcome::Empty,
        Err(e) => {
            while session.backspace() {}
            LineOutcome::Rejected(e)
        }
    }
}

/// Run the simple interactive text mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// solution list is empty.
pub fn run_simple<V: GuessValidator, S: StatsStorage>(
    solutions: &[Word],
    validator: V,
    store: &mut StatsStore<S>,
    fixed_solution: Option<Word>,
) -> Result<(), String> {
    let next_solution = || {
        fixed_solution
            .or_else(|| pick_solution(solutions, &mut rand::rng()).copied())
            .ok_or_else(|| "Solution list is empty".to_string())
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Garden - Guess the Word                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut session = Session::new(next_solution()?, validator);

    loop {
        let prompt = format!("Guess {}/6", session.row() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match play_line(&mut session, store, &line) {
            LineOutcome::Empty => {}
            LineOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineOutcome::NewGame => {
                session.restart(next_solution()?);
                println!("\n🔄 New game started!\n");
            }
            LineOutcome::ShowStats => print_stats(store.record()),
            LineOutcome::Help => print_help(),
            LineOutcome::UnknownCommand(cmd) => {
                println!("{}", format!("Unknown command '/{cmd}'").red());
            }
            LineOutcome::Rejected(e) => println!("{}", format!("❌ {e}").red()),
            LineOutcome::Submitted(submission) => {
                println!();
                print_board(&session);
                print_keyboard(session.keyboard());

                let finished = match &submission {
                    Submission::Continue { .. } => false,
                    Submission::Won {
                        attempts,
                        persisted,
                        ..
                    } => {
                        let plural = if *attempts > 1 { "s" } else { "" };
                        println!(
                            "\n{}",
                            format!(
                                "🎉 Nice! You guessed {} in {attempts} attempt{plural}.",
                                session.solution()
                            )
                            .green()
                            .bold()
                        );
                        warn_if_unsaved(persisted);
                        true
                    }
                    Submission::Lost {
                        solution,
                        persisted,
                        ..
                    } => {
                        println!(
                            "\n{}",
                            format!("Out of attempts. The word was {solution}.")
                                .red()
                                .bold()
                        );
                        warn_if_unsaved(persisted);
                        true
                    }
                };

                if finished {
                    print_stats(store.record());
                    let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                    if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                        session.restart(next_solution()?);
                        println!("\n🔄 New game started!\n");
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn print_help() {
    println!("Guess the 5-letter word in 6 tries.");
    println!("  - 🟩 letter in the right spot");
    println!("  - 🟨 letter in the word, wrong spot");
    println!("  - ⬜ letter not in the word\n");
    println!("Commands: /new, /stats, /help, /quit\n");
}

fn warn_if_unsaved(persisted: &Persisted) {
    if let Persisted::StorageUnavailable { reason } = persisted {
        println!(
            "{}",
            format!("⚠ Statistics not saved: {reason}").yellow()
        );
    }
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
