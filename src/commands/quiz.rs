//! Vocabulary quiz in text mode

use crate::quiz::{Quiz, VocabEntry};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Summary of a finished quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub missed: Vec<&'static str>,
}

/// Parse a one-based choice number typed by the player
#[must_use]
pub fn parse_choice(input: &str, choices: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=choices).contains(&n).then(|| n - 1)
}

/// Run the quiz over `deck`, reading answers from `input`
///
/// After each round the player may play again with a fresh shuffle. Returns the
/// summary of the last finished round, or `None` if the player quits or input
/// ends before any round finishes.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn run_quiz<I: BufRead, W: Write>(
    deck: &'static [VocabEntry],
    input: &mut I,
    out: &mut W,
) -> io::Result<Option<QuizSummary>> {
    let mut rng = rand::rng();
    let mut quiz = Quiz::start(deck, &mut rng);

    writeln!(out, "\n{}", "📚 Vocabulary Quiz".bright_cyan().bold())?;
    writeln!(out, "Pick the right definition. Type 'q' to quit.\n")?;

    loop {
        let Some(summary) = play_round(&mut quiz, input, out)? else {
            return Ok(None);
        };

        write!(out, "Play again? (yes/no): ")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        if matches!(line.trim().to_lowercase().as_str(), "yes" | "y") {
            quiz.restart(&mut rng);
            writeln!(out, "\n🔄 New round started!\n")?;
        } else {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(Some(summary));
        }
    }
}

fn play_round<I: BufRead, W: Write>(
    quiz: &mut Quiz,
    input: &mut I,
    out: &mut W,
) -> io::Result<Option<QuizSummary>> {
    let mut missed = Vec::new();

    while let Some(question) = quiz.current().cloned() {
        writeln!(
            out,
            "Question {}/{}: {}",
            quiz.position(),
            quiz.total(),
            question.word.bright_yellow().bold()
        )?;
        for (i, choice) in question.choices.iter().enumerate() {
            writeln!(out, "  {}. {choice}", i + 1)?;
        }

        let answer = loop {
            write!(out, "Your answer: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match parse_choice(&line, question.choices.len()) {
                Some(choice) => match quiz.answer(choice) {
                    Ok(answer) => break answer,
                    Err(e) => writeln!(out, "{}", e.to_string().red())?,
                },
                None => writeln!(
                    out,
                    "{}",
                    format!("Enter a number from 1 to {}", question.choices.len()).red()
                )?,
            }
        };

        if answer.is_correct() {
            writeln!(out, "{}\n", "✓ Correct!".green().bold())?;
        } else {
            missed.push(question.word);
            writeln!(
                out,
                "{} {}\n",
                "✗ Not quite.".red().bold(),
                format!("Answer: {}", question.choices[answer.correct_index]).green()
            )?;
        }

        if let Err(e) = quiz.advance() {
            writeln!(out, "{}", e.to_string().red())?;
            break;
        }
    }

    let summary = QuizSummary {
        score: quiz.score(),
        total: quiz.total(),
        missed,
    };

    writeln!(
        out,
        "{}",
        format!("You scored {} out of {}.", summary.score, summary.total).bold()
    )?;
    if !summary.missed.is_empty() {
        writeln!(out, "Missed: {}", summary.missed.join(", "))?;
    }
    writeln!(out, "Tip: revisit words you missed to grow your garden.")?;

    Ok(Some(summary))
}
