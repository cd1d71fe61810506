//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess is classified as:
//! - `Absent`  (letter not in the solution, after accounting for consumed letters)
//! - `Present` (letter in the solution, wrong position)
//! - `Correct` (letter in the right position)

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Absent,
    Present,
    Correct,
}

impl Outcome {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase name as shown to the rendering layer
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback for a whole guess, one outcome per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Outcome; WORD_LEN]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Outcome::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(outcomes: [Outcome; WORD_LEN]) -> Self {
        Self(outcomes)
    }

    /// Evaluate `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches are `Correct` and consume that solution letter
    /// 2. Second pass: every other position claims the leftmost unconsumed occurrence of
    ///    its letter (`Present`), or is `Absent` if none remains
    ///
    /// Consumption is tracked per occurrence, so a repeated guess letter can never
    /// claim the same solution letter twice.
    ///
    /// # Examples
    /// ```
    /// use word_garden::core::{Feedback, Outcome, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let solution = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// assert_eq!(feedback.outcomes()[1], Outcome::Correct);
    /// assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Outcome::Absent; WORD_LEN];
        let mut available: [Option<u8>; WORD_LEN] = (*solution.letters()).map(Some);

        for (i, &letter) in guess.letters().iter().enumerate() {
            if available[i] == Some(letter) {
                result[i] = Outcome::Correct;
                available[i] = None;
            }
        }

        for (i, &letter) in guess.letters().iter().enumerate() {
            if result[i] == Outcome::Correct {
                continue;
            }
            if let Some(slot) = available.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = Outcome::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LEN] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Ergonomic Option API; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut outcomes = [Outcome::Absent; WORD_LEN];
        let mut chars = s.chars();

        for slot in &mut outcomes {
            *slot = match chars.next()? {
                'G' | 'g' | '🟩' => Outcome::Correct,
                'Y' | 'y' | '🟨' => Outcome::Present,
                '-' | '_' | '⬜' => Outcome::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(outcomes))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
