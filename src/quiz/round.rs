//! Multiple-choice quiz state
//!
//! Question order and each question's choices are shuffled when the quiz
//! starts. A question must be answered before moving on.

use super::deck::VocabEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    AlreadyAnswered,
    NotAnswered,
    ChoiceOutOfRange(usize),
    Finished,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAnswered => write!(f, "Question already answered"),
            Self::NotAnswered => write!(f, "Answer the question first"),
            Self::ChoiceOutOfRange(i) => write!(f, "No choice number {}", i + 1),
            Self::Finished => write!(f, "Quiz is finished"),
        }
    }
}

impl std::error::Error for QuizError {}

/// A question as presented: the word and its shuffled choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub word: &'static str,
    pub choices: Vec<&'static str>,
    correct_index: usize,
}

impl Question {
    fn shuffled<R: Rng + ?Sized>(entry: &VocabEntry, rng: &mut R) -> Self {
        let mut choices = Vec::with_capacity(entry.wrong.len() + 1);
        choices.push(entry.correct);
        choices.extend_from_slice(&entry.wrong);
        choices.shuffle(rng);

        let correct_index = choices
            .iter()
            .position(|&c| c == entry.correct)
            .unwrap_or_default();

        Self {
            word: entry.word,
            choices,
            correct_index,
        }
    }

    #[must_use]
    pub const fn correct_index(&self) -> usize {
        self.correct_index
    }
}

/// Result of answering a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub chosen: usize,
    pub correct_index: usize,
}

impl Answer {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.chosen == self.correct_index
    }
}

pub struct Quiz {
    deck: &'static [VocabEntry],
    questions: Vec<Question>,
    index: usize,
    score: usize,
    answered: Option<Answer>,
}

impl Quiz {
    /// Start a quiz over `deck` with shuffled order and choices
    pub fn start<R: Rng + ?Sized>(deck: &'static [VocabEntry], rng: &mut R) -> Self {
        let mut quiz = Self {
            deck,
            questions: Vec::new(),
            index: 0,
            score: 0,
            answered: None,
        };
        quiz.restart(rng);
        quiz
    }

    /// Reshuffle and zero the score
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<&VocabEntry> = self.deck.iter().collect();
        order.shuffle(rng);
        self.questions = order
            .into_iter()
            .map(|entry| Question::shuffled(entry, rng))
            .collect();
        self.index = 0;
        self.score = 0;
        self.answered = None;
    }

    /// Question on screen, `None` once the quiz is finished
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Pick a choice for the current question
    ///
    /// # Errors
    ///
    /// Fails if the quiz is finished, the question was already answered, or
    /// `choice` is not one of the offered choices.
    pub fn answer(&mut self, choice: usize) -> Result<Answer, QuizError> {
        let question = self.current().ok_or(QuizError::Finished)?;
        if self.answered.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        if choice >= question.choices.len() {
            return Err(QuizError::ChoiceOutOfRange(choice));
        }

        let answer = Answer {
            chosen: choice,
            correct_index: question.correct_index,
        };
        if answer.is_correct() {
            self.score += 1;
        }
        self.answered = Some(answer);
        Ok(answer)
    }

    /// Move to the next question; returns `false` when the quiz just finished
    ///
    /// # Errors
    ///
    /// Fails if the current question has not been answered or the quiz is over.
    pub fn advance(&mut self) -> Result<bool, QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }
        if self.answered.is_none() {
            return Err(QuizError::NotAnswered);
        }
        self.answered = None;
        self.index += 1;
        Ok(!self.is_finished())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    #[must_use]
    pub const fn answered(&self) -> Option<Answer> {
        self.answered
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// One-based number of the current question
    #[must_use]
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::VOCABULARY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiz() -> Quiz {
        Quiz::start(VOCABULARY, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn every_entry_asked_once() {
        let q = quiz();
        let mut words: Vec<_> = q.questions.iter().map(|q| q.word).collect();
        words.sort_unstable();
        let mut expected: Vec<_> = VOCABULARY.iter().map(|e| e.word).collect();
        expected.sort_unstable();
        assert_eq!(words, expected);
    }

    #[test]
    fn choices_contain_correct_definition() {
        let q = quiz();
        for question in &q.questions {
            let entry = VOCABULARY.iter().find(|e| e.word == question.word).unwrap();
            assert_eq!(question.choices.len(), 4);
            assert_eq!(question.choices[question.correct_index()], entry.correct);
        }
    }

    #[test]
    fn correct_answer_scores() {
        let mut q = quiz();
        let correct = q.current().unwrap().correct_index();
        let answer = q.answer(correct).unwrap();
        assert!(answer.is_correct());
        assert_eq!(q.score(), 1);
    }

    #[test]
    fn wrong_answer_reveals_correct_index() {
        let mut q = quiz();
        let correct = q.current().unwrap().correct_index();
        let wrong = (correct + 1) % 4;
        let answer = q.answer(wrong).unwrap();
        assert!(!answer.is_correct());
        assert_eq!(answer.correct_index, correct);
        assert_eq!(q.score(), 0);
    }

    #[test]
    fn cannot_answer_twice_or_skip() {
        let mut q = quiz();
        assert_eq!(q.advance(), Err(QuizError::NotAnswered));
        q.answer(0).unwrap();
        assert_eq!(q.answer(1), Err(QuizError::AlreadyAnswered));
        assert_eq!(q.answer(9).err(), Some(QuizError::AlreadyAnswered));
    }

    #[test]
    fn choice_out_of_range() {
        let mut q = quiz();
        assert_eq!(q.answer(4), Err(QuizError::ChoiceOutOfRange(4)));
        assert!(q.answered().is_none());
    }

    #[test]
    fn perfect_run_finishes_with_full_score() {
        let mut q = quiz();
        let total = q.total();
        for i in 0..total {
            assert_eq!(q.position(), i + 1);
            let correct = q.current().unwrap().correct_index();
            q.answer(correct).unwrap();
            assert_eq!(q.advance(), Ok(i + 1 < total));
        }
        assert!(q.is_finished());
        assert!(q.current().is_none());
        assert_eq!(q.score(), total);
        assert_eq!(q.answer(0), Err(QuizError::Finished));
        assert_eq!(q.advance(), Err(QuizError::Finished));
    }

    #[test]
    fn restart_resets_score() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut q = Quiz::start(VOCABULARY, &mut rng);
        let correct = q.current().unwrap().correct_index();
        q.answer(correct).unwrap();
        q.restart(&mut rng);
        assert_eq!(q.score(), 0);
        assert_eq!(q.position(), 1);
        assert!(q.answered().is_none());
    }
}
