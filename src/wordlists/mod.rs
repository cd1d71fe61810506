//! Word lists for the guessing game
//!
//! Provides the embedded solution list and helpers to pick a session's solution.

mod embedded;
pub mod loader;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a solution uniformly at random, `None` if the list is empty
pub fn pick_solution<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
