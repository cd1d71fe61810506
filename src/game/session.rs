//! Game session state machine
//!
//! A session owns the solution, the 6×5 board, the cursor and the keyboard
//! aggregate. Rows are filled strictly in order; a row is evaluated when it is
//! submitted with five letters.
//!
//! ```text
//! Filling(row, col) --submit--> Filling(row + 1, 0) | Won | Lost
//! ```

use super::{GameError, GuessValidator, Key};
use crate::core::{Feedback, KeyboardState, Outcome, WORD_LEN, Word};
use crate::stats::Persisted;

/// Number of guesses allowed per session
pub const MAX_ATTEMPTS: usize = 6;

/// Receives terminal outcomes exactly once per session
pub trait OutcomeRecorder {
    fn record_win(&mut self, attempts: u8) -> Persisted;
    fn record_fail(&mut self) -> Persisted;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Filling,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One board square: a typed letter and, once submitted, its outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub outcome: Option<Outcome>,
}

pub type Board = [[Cell; WORD_LEN]; MAX_ATTEMPTS];

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Guess evaluated, next row is open
    Continue { feedback: Feedback },
    /// Guess matched the solution
    Won {
        feedback: Feedback,
        attempts: u8,
        persisted: Persisted,
    },
    /// Last row used without a match
    Lost {
        feedback: Feedback,
        solution: Word,
        persisted: Persisted,
    },
}

impl Submission {
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        match self {
            Self::Continue { feedback }
            | Self::Won { feedback, .. }
            | Self::Lost { feedback, .. } => feedback,
        }
    }
}

pub struct Session<V: GuessValidator> {
    solution: Word,
    board: Board,
    row: usize,
    col: usize,
    state: SessionState,
    keyboard: KeyboardState,
    validator: V,
}

impl<V: GuessValidator> Session<V> {
    #[must_use]
    pub fn new(solution: Word, validator: V) -> Self {
        Self {
            solution,
            board: Board::default(),
            row: 0,
            col: 0,
            state: SessionState::Filling,
            keyboard: KeyboardState::new(),
            validator,
        }
    }

    /// Discard all progress and start over with a new solution
    pub fn restart(&mut self, solution: Word) {
        self.solution = solution;
        self.board = Board::default();
        self.row = 0;
        self.col = 0;
        self.state = SessionState::Filling;
        self.keyboard.clear();
    }

    /// Type a letter into the current row
    ///
    /// # Errors
    ///
    /// `GameOver` after a terminal state, `InvalidInput` for non-letters,
    /// `RowFull` when five letters are already typed. The session is unchanged.
    pub fn input_letter(&mut self, ch: char) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !ch.is_ascii_alphabetic() {
            return Err(GameError::InvalidInput(ch));
        }
        if self.col >= WORD_LEN {
            return Err(GameError::RowFull);
        }

        // is_ascii_alphabetic guarantees a single byte
        self.board[self.row][self.col] = Cell {
            letter: Some(ch.to_ascii_uppercase() as u8),
            outcome: None,
        };
        self.col += 1;
        Ok(())
    }

    /// Remove the last typed letter; returns `false` if there was nothing to remove
    pub fn backspace(&mut self) -> bool {
        if self.state.is_terminal() || self.col == 0 {
            return false;
        }
        self.col -= 1;
        self.board[self.row][self.col] = Cell::default();
        true
    }

    /// Submit the current row
    ///
    /// On a terminal transition exactly one of `recorder.record_win` or
    /// `recorder.record_fail` is called; intermediate rows never touch it.
    ///
    /// # Errors
    ///
    /// `GameOver` after a terminal state, `PrematureSubmit` with fewer than
    /// five letters, or whatever the validator rejects with. Rejected
    /// submissions leave row and column untouched.
    pub fn submit<R: OutcomeRecorder + ?Sized>(
        &mut self,
        recorder: &mut R,
    ) -> Result<Submission, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.col < WORD_LEN {
            return Err(GameError::PrematureSubmit { letters: self.col });
        }

        let typed: String = self.board[self.row]
            .iter()
            .filter_map(|cell| cell.letter.map(char::from))
            .collect();
        let guess = self.validator.validate(&typed)?;

        let feedback = Feedback::evaluate(&guess, &self.solution);
        for (cell, &outcome) in self.board[self.row].iter_mut().zip(feedback.outcomes()) {
            cell.outcome = Some(outcome);
        }
        self.keyboard.apply(&guess, &feedback);

        self.row += 1;
        self.col = 0;

        if guess == self.solution {
            self.state = SessionState::Won;
            let attempts = self.row as u8;
            let persisted = recorder.record_win(attempts);
            Ok(Submission::Won {
                feedback,
                attempts,
                persisted,
            })
        } else if self.row >= MAX_ATTEMPTS {
            self.state = SessionState::Lost;
            let persisted = recorder.record_fail();
            Ok(Submission::Lost {
                feedback,
                solution: self.solution,
                persisted,
            })
        } else {
            Ok(Submission::Continue { feedback })
        }
    }

    /// Dispatch a key from either keyboard
    ///
    /// Returns the submission when `Enter` was accepted.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn handle_key<R: OutcomeRecorder + ?Sized>(
        &mut self,
        key: Key,
        recorder: &mut R,
    ) -> Result<Option<Submission>, GameError> {
        match key {
            Key::Letter(ch) => self.input_letter(ch).map(|()| None),
            Key::Backspace => {
                self.backspace();
                Ok(None)
            }
            Key::Enter => self.submit(recorder).map(Some),
        }
    }

    /// Evaluated guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<(Word, Feedback)> {
        self.board[..self.row]
            .iter()
            .filter_map(|&cells| {
                let letters = cells.map(|c| c.letter.unwrap_or(b'?'));
                let outcomes = cells.map(|c| c.outcome.unwrap_or(Outcome::Absent));
                Word::from_letters(letters)
                    .ok()
                    .map(|w| (w, Feedback::new(outcomes)))
            })
            .collect()
    }

    /// Letters typed on the row in progress
    #[must_use]
    pub fn pending(&self) -> String {
        if self.row >= MAX_ATTEMPTS {
            return String::new();
        }
        self.board[self.row][..self.col]
            .iter()
            .filter_map(|c| c.letter.map(char::from))
            .collect()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Solution of this session; renderers should only reveal it once terminal
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AnyWord;

    #[derive(Default)]
    struct Tally {
        wins: Vec<u8>,
        fails: usize,
    }

    impl OutcomeRecorder for Tally {
        fn record_win(&mut self, attempts: u8) -> Persisted {
            self.wins.push(attempts);
            Persisted::Ok
        }

        fn record_fail(&mut self) -> Persisted {
            self.fails += 1;
            Persisted::Ok
        }
    }

    fn session(solution: &str) -> Session<AnyWord> {
        Session::new(Word::new(solution).unwrap(), AnyWord)
    }

    fn type_word(s: &mut Session<AnyWord>, word: &str) {
        for ch in word.chars() {
            s.input_letter(ch).unwrap();
        }
    }

    #[test]
    fn new_session_is_empty() {
        let s = session("crane");
        assert_eq!((s.row(), s.col()), (0, 0));
        assert_eq!(s.state(), SessionState::Filling);
        assert!(s.board().iter().flatten().all(|c| *c == Cell::default()));
    }

    #[test]
    fn input_letter_appends_uppercase() {
        let mut s = session("crane");
        s.input_letter('t').unwrap();
        s.input_letter('R').unwrap();
        assert_eq!(s.col(), 2);
        assert_eq!(s.pending(), "TR");
        assert_eq!(s.board()[0][0].letter, Some(b'T'));
    }

    #[test]
    fn input_letter_rejects_non_letters_and_full_row() {
        let mut s = session("crane");
        assert_eq!(s.input_letter('3'), Err(GameError::InvalidInput('3')));
        type_word(&mut s, "trace");
        assert_eq!(s.input_letter('x'), Err(GameError::RowFull));
        assert_eq!(s.col(), 5);
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut s = session("crane");
        assert!(!s.backspace());
        type_word(&mut s, "tr");
        assert!(s.backspace());
        assert_eq!(s.col(), 1);
        assert_eq!(s.board()[0][1], Cell::default());
        assert_eq!(s.pending(), "T");
    }

    #[test]
    fn premature_submit_is_rejected_without_change() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        type_word(&mut s, "tra");
        assert_eq!(
            s.submit(&mut tally),
            Err(GameError::PrematureSubmit { letters: 3 })
        );
        assert_eq!((s.row(), s.col()), (0, 3));
    }

    #[test]
    fn submit_writes_outcomes_and_advances() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        type_word(&mut s, "trace");

        let submission = s.submit(&mut tally).unwrap();
        assert!(matches!(submission, Submission::Continue { .. }));
        assert_eq!((s.row(), s.col()), (1, 0));

        let outcomes: Vec<_> = s.board()[0].iter().map(|c| c.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                Some(Outcome::Absent),
                Some(Outcome::Correct),
                Some(Outcome::Correct),
                Some(Outcome::Present),
                Some(Outcome::Correct),
            ]
        );
        assert_eq!(s.keyboard().get(b'T'), Some(Outcome::Absent));
        assert_eq!(s.keyboard().get(b'R'), Some(Outcome::Correct));
        assert!(tally.wins.is_empty());
        assert_eq!(tally.fails, 0);
    }

    #[test]
    fn win_on_third_attempt_records_once() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        for word in ["trace", "grain"] {
            type_word(&mut s, word);
            s.submit(&mut tally).unwrap();
        }
        type_word(&mut s, "crane");
        let submission = s.submit(&mut tally).unwrap();

        assert!(matches!(
            submission,
            Submission::Won { attempts: 3, .. }
        ));
        assert_eq!(s.state(), SessionState::Won);
        assert_eq!(tally.wins, vec![3]);
        assert_eq!(tally.fails, 0);
    }

    #[test]
    fn six_misses_lose_and_record_fail_once() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut s, "zzzzz");
            s.submit(&mut tally).unwrap();
        }

        assert_eq!(s.state(), SessionState::Lost);
        assert_eq!(s.row(), MAX_ATTEMPTS);
        assert_eq!(tally.fails, 1);
        assert!(tally.wins.is_empty());
    }

    #[test]
    fn terminal_state_rejects_input() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        type_word(&mut s, "crane");
        s.submit(&mut tally).unwrap();

        assert_eq!(s.input_letter('a'), Err(GameError::GameOver));
        assert!(!s.backspace());
        assert_eq!(s.submit(&mut tally), Err(GameError::GameOver));
        assert_eq!(tally.wins, vec![1]);
    }

    #[test]
    fn handle_key_dispatches() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        for name in ["c", "r", "a", "n", "x", "Backspace", "e"] {
            let key = Key::from_name(name).unwrap();
            assert_eq!(s.handle_key(key, &mut tally), Ok(None));
        }
        let submission = s.handle_key(Key::Enter, &mut tally).unwrap();
        assert!(matches!(submission, Some(Submission::Won { attempts: 1, .. })));
    }

    #[test]
    fn history_lists_evaluated_rows() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        type_word(&mut s, "trace");
        s.submit(&mut tally).unwrap();
        type_word(&mut s, "gr");

        let history = s.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0.to_string(), "TRACE");
        assert_eq!(history[0].1.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn restart_discards_progress() {
        let mut s = session("crane");
        let mut tally = Tally::default();
        type_word(&mut s, "crane");
        s.submit(&mut tally).unwrap();

        s.restart(Word::new("shine").unwrap());
        assert_eq!(s.state(), SessionState::Filling);
        assert_eq!((s.row(), s.col()), (0, 0));
        assert_eq!(s.keyboard(), &KeyboardState::new());
        assert_eq!(s.solution().to_string(), "SHINE");
    }
}
