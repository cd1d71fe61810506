//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameError, GuessValidator, Key, Session, SessionState, Submission};
use crate::stats::{Persisted, StatsStorage, StatsStore};
use crate::wordlists::pick_solution;
use anyhow::{Result, anyhow};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, V: GuessValidator, S: StatsStorage> {
    pub session: Session<V>,
    pub stats: StatsStore<S>,
    pub solutions: &'a [Word],
    pub fixed_solution: Option<Word>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, V: GuessValidator, S: StatsStorage> App<'a, V, S> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if there is no fixed solution and the list is empty.
    pub fn new(
        solutions: &'a [Word],
        validator: V,
        stats: StatsStore<S>,
        fixed_solution: Option<Word>,
    ) -> Result<Self> {
        let solution = Self::choose(solutions, fixed_solution)?;

        Ok(Self {
            session: Session::new(solution, validator),
            stats,
            solutions,
            fixed_solution,
            input_mode: InputMode::Playing,
            messages: vec![Message {
                text: "Guess the 5-letter word in 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            show_stats: true,
            should_quit: false,
        })
    }

    fn choose(solutions: &[Word], fixed: Option<Word>) -> Result<Word> {
        fixed
            .or_else(|| pick_solution(solutions, &mut rand::rng()).copied())
            .ok_or_else(|| anyhow!("Solution list is empty"))
    }

    /// Feed a board key to the session
    pub fn press(&mut self, key: Key) {
        match self.session.handle_key(key, &mut self.stats) {
            Ok(Some(submission)) => self.on_submission(&submission),
            Ok(None) => {}
            Err(GameError::GameOver) => {
                self.add_message("Game over! Press 'n' for a new game.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn on_submission(&mut self, submission: &Submission) {
        match submission {
            Submission::Continue { .. } => {}
            Submission::Won {
                attempts,
                persisted,
                ..
            } => {
                let plural = if *attempts > 1 { "s" } else { "" };
                let text = format!(
                    "Nice! You guessed {} in {attempts} attempt{plural}.",
                    self.session.solution()
                );
                self.add_message(&text, MessageStyle::Success);
                self.finish(persisted);
            }
            Submission::Lost {
                solution,
                persisted,
                ..
            } => {
                let text = format!("Out of attempts. The word was {solution}.");
                self.add_message(&text, MessageStyle::Error);
                self.finish(persisted);
            }
        }
    }

    fn finish(&mut self, persisted: &Persisted) {
        if let Persisted::StorageUnavailable { reason } = persisted {
            let text = format!("Statistics not saved: {reason}");
            self.add_message(&text, MessageStyle::Error);
        }
        self.input_mode = InputMode::GameOver;
        self.show_stats = true;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match Self::choose(self.solutions, self.fixed_solution) {
            Ok(solution) => {
                self.session.restart(solution);
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.state() != SessionState::Filling
    }
}

/// Runs `restore` when dropped
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    const fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    // Best effort: the terminal may be half set up or already gone
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
}

/// Run the TUI application
///
/// The terminal is restored on every exit path, including a failure partway
/// through setup.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<V: GuessValidator, S: StatsStorage>(app: App<'_, V, S>) -> Result<()> {
    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    run_app(&mut terminal, app)
}

fn run_app<B: ratatui::backend::Backend, V: GuessValidator, S: StatsStorage>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, V, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.show_stats = !app.show_stats,
                code => match app.input_mode {
                    InputMode::GameOver => match code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') | KeyCode::Enter => app.new_game(),
                        _ => {}
                    },
                    InputMode::Playing => match code {
                        KeyCode::Char(c) => {
                            if let Some(key) = Key::from_name(&c.to_string()) {
                                app.press(key);
                            } else {
                                let text = GameError::InvalidInput(c).to_string();
                                app.add_message(&text, MessageStyle::Error);
                            }
                        }
                        KeyCode::Enter => app.press(Key::Enter),
                        KeyCode::Backspace => app.press(Key::Backspace),
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
