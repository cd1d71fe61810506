//! Word Garden - CLI
//!
//! Wordle-style guessing game with TUI and text modes, plus a vocabulary quiz.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use word_garden::{
    commands::{analyze_guess, run_quiz, run_simple},
    core::Word,
    game::Validator,
    output::{print_analysis_result, print_stats},
    quiz::VOCABULARY,
    stats::{FileStorage, Persisted, StatsStore},
    wordlists::{SOLUTIONS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_garden",
    about = "Terminal word games: guess the 5-letter word, or test your vocabulary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution list: 'builtin' (default) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Directory for saved statistics (default: platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Play this word instead of a random one
    #[arg(long, global = true)]
    solution: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple text mode (line-based, no TUI)
    Simple,

    /// Multiple-choice vocabulary quiz
    Quiz,

    /// Show the guess distribution
    Stats,

    /// Delete saved statistics
    ResetStats,

    /// Show how a guess splits the solution list
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

/// Load the solution list based on the -w flag
fn load_solutions(wordlist: &str) -> Result<Vec<Word>> {
    use word_garden::wordlists::loader::load_from_file;

    let words = match wordlist {
        "builtin" => words_from_slice(SOLUTIONS),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?,
    };

    if words.is_empty() {
        return Err(anyhow!("Word list '{wordlist}' has no 5-letter words"));
    }
    Ok(words)
}

fn open_stats(data_dir: Option<PathBuf>) -> StatsStore<FileStorage> {
    let storage = data_dir.map_or_else(FileStorage::new, FileStorage::with_dir);
    let (store, persisted) = StatsStore::open(storage);
    warn_if_unavailable(&persisted);
    store
}

fn warn_if_unavailable(persisted: &Persisted) {
    if let Persisted::StorageUnavailable { reason } = persisted {
        eprintln!(
            "{}",
            format!("⚠ Statistics storage unavailable ({reason}); continuing without it").yellow()
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let solutions = load_solutions(&cli.wordlist)?;
    let fixed_solution = cli
        .solution
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|e| anyhow!("Invalid --solution: {e}"))?;
    let validator = Validator::for_game(cli.strict, &solutions, fixed_solution);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&solutions, validator, cli.data_dir, fixed_solution),
        Commands::Simple => {
            let mut store = open_stats(cli.data_dir);
            run_simple(&solutions, validator, &mut store, fixed_solution)
                .map_err(|e| anyhow!(e))
        }
        Commands::Quiz => {
            let stdin = io::stdin();
            run_quiz(VOCABULARY, &mut stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Stats => {
            let store = open_stats(cli.data_dir);
            print_stats(store.record());
            Ok(())
        }
        Commands::ResetStats => {
            let mut store = open_stats(cli.data_dir);
            match store.reset() {
                Persisted::Ok => println!("{}", "Statistics cleared.".green()),
                unavailable => warn_if_unavailable(&unavailable),
            }
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess, &solutions).map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    solutions: &[Word],
    validator: Validator,
    data_dir: Option<PathBuf>,
    fixed_solution: Option<Word>,
) -> Result<()> {
    use word_garden::interactive::{App, run_tui};

    let store = open_stats(data_dir);
    let app = App::new(solutions, validator, store, fixed_solution)?;
    run_tui(app)
}
