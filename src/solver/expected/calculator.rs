//! Expected-remaining calculation for Wordle guesses
//!
//! Given a guess and a candidate set, computes how many candidates are expected to
//! survive once the feedback for that guess is known, assuming every candidate is
//! equally likely to be the secret.

use crate::core::{Hints, Pattern, SolveError, Word, evaluate};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected number of candidates left after this guess
    pub expected_remaining: f64,
    /// Largest pattern group (worst-case remaining candidates)
    pub max_partition: usize,
    /// Shannon entropy of the pattern distribution, in bits
    pub entropy: f64,
}

/// Expected remaining candidates after playing `guess`
///
/// Candidates are grouped by the pattern the guess would produce against each of
/// them. A group of size `k` survives for `k` of the `n` possible secrets, so the
/// expectation is `Σ k² / n`.
///
/// # Examples
/// ```
/// use wordle_expect::core::Word;
/// use wordle_expect::solver::expected::expected_remaining;
///
/// let candidates: Vec<Word> = ["apple", "grape", "stage", "crane", "share"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // Every candidate gives STAGE a different pattern
/// let stage = Word::new("stage").unwrap();
/// assert!((expected_remaining(&stage, &candidates) - 1.0).abs() < 1e-9);
///
/// // BUXOM shares no letter with any candidate, so nothing is learned
/// let buxom = Word::new("buxom").unwrap();
/// assert!((expected_remaining(&buxom, &candidates) - 5.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let counts = group_by_pattern(guess, candidates);
    sum_of_squares(&counts) as f64 / candidates.len() as f64
}

/// Expected remaining candidates, computed by replaying hypothetical feedback
///
/// For every candidate `w` a scratch copy of `base` records the feedback `guess`
/// would get if `w` were the secret, and the candidates still matching are counted.
/// This is quadratic in the number of candidates and is kept as the reference the
/// partition form is checked against.
///
/// # Errors
/// - `LengthMismatch` if a candidate and the guess differ in length
/// - `Contradiction` if the hypothetical feedback conflicts with `base`
pub fn expected_remaining_exhaustive(
    guess: &Word,
    candidates: &[Word],
    base: &Hints,
) -> Result<f64, SolveError> {
    if candidates.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0usize;
    for secret in candidates {
        let scratch = base.with_feedback(guess, evaluate(secret, guess)?)?;
        total += candidates.iter().filter(|w| scratch.matches(w)).count();
    }

    Ok(total as f64 / candidates.len() as f64)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(candidate, guess);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

fn sum_of_squares(counts: &FxHashMap<Pattern, usize>) -> usize {
    counts.values().map(|&k| k * k).sum()
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p)
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate expected remaining, worst case and entropy in one pass
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            expected_remaining: 0.0,
            max_partition: 0,
            entropy: 0.0,
        };
    }

    let counts = group_by_pattern(guess, candidates);

    GuessMetrics {
        expected_remaining: sum_of_squares(&counts) as f64 / candidates.len() as f64,
        max_partition: counts.values().copied().max().unwrap_or(0),
        entropy: shannon_entropy(&counts),
    }
}
