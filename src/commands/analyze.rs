//! Guess analysis command
//!
//! Shows how a guess would split the solution list into feedback groups.

use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Word,
    /// Feedback patterns with the number of solutions producing each, largest first
    pub buckets: Vec<(Feedback, usize)>,
    pub total_solutions: usize,
}

impl AnalysisResult {
    /// Size of the largest group, the worst case after this guess
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.buckets.first().map_or(0, |&(_, n)| n)
    }

    /// Expected number of solutions left after this guess
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total_solutions == 0 {
            return 0.0;
        }
        let sum_sq: usize = self.buckets.iter().map(|&(_, n)| n * n).sum();
        sum_sq as f64 / self.total_solutions as f64
    }
}

/// Analyze a guess against every solution
///
/// # Errors
///
/// Returns an error if the guess is not a 5-letter word or the list is empty.
pub fn analyze_guess(guess: &str, solutions: &[Word]) -> Result<AnalysisResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    if solutions.is_empty() {
        return Err("Solution list is empty".to_string());
    }

    let feedbacks: Vec<Feedback> = solutions
        .par_iter()
        .map(|solution| Feedback::evaluate(&guess, solution))
        .collect();

    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for feedback in feedbacks {
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let mut buckets: Vec<(Feedback, usize)> = counts.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_emoji().cmp(&b.0.to_emoji())));

    Ok(AnalysisResult {
        guess,
        buckets,
        total_solutions: solutions.len(),
    })
}
