//! Parallel scoring of a guess pool under a time budget

use super::calculator::expected_remaining;
use crate::core::Word;
use crate::solver::budget::{Deadline, Infeasible};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A guess with its expected number of remaining candidates (lower is better)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub word: Word,
    pub score: f64,
}

impl ScoreEntry {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }
}

/// Score every word in `pool` against `candidates`
///
/// Entries come back in pool order. The deadline is polled before each guess; once it
/// reports the work cannot finish in time, the remaining guesses are skipped and the
/// whole pass is reported as [`Infeasible`].
///
/// # Errors
/// Returns `Infeasible` when the deadline is exceeded before every guess is scored.
///
/// # Examples
/// ```
/// use indicatif::ProgressBar;
/// use wordle_expect::core::Word;
/// use wordle_expect::solver::Budget;
/// use wordle_expect::solver::expected::score_guesses;
///
/// let words: Vec<Word> = ["crane", "slate", "plate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let deadline = Budget::unlimited().start();
/// let scores = score_guesses(&words, &words, &deadline, &ProgressBar::hidden()).unwrap();
/// assert_eq!(scores.len(), 3);
/// ```
pub fn score_guesses(
    pool: &[Word],
    candidates: &[Word],
    deadline: &Deadline,
    progress: &ProgressBar,
) -> Result<Vec<ScoreEntry>, Infeasible> {
    let total = pool.len();
    let done = AtomicUsize::new(0);
    let aborted = AtomicBool::new(false);
    progress.set_length(total as u64);
    progress.set_position(0);

    let scored: Option<Vec<ScoreEntry>> = pool
        .par_iter()
        .map(|guess| {
            if aborted.load(Ordering::Relaxed) {
                return None;
            }
            if deadline.exceeded(done.load(Ordering::Relaxed), total) {
                aborted.store(true, Ordering::Relaxed);
                return None;
            }

            let score = expected_remaining(guess, candidates);
            done.fetch_add(1, Ordering::Relaxed);
            progress.inc(1);
            Some(ScoreEntry::new(guess.clone(), score))
        })
        .collect();

    scored.ok_or_else(|| deadline.infeasible(done.load(Ordering::Relaxed), total))
}

/// Sort entries best first
///
/// The sort is stable, so entries with equal scores keep their incoming order; for
/// entries produced from the dictionary that is dictionary order.
pub fn rank(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| a.score.total_cmp(&b.score));
}

/// Keep only entries whose word is one of `candidates`
#[must_use]
pub fn only_candidates(entries: &[ScoreEntry], candidates: &[Word]) -> Vec<ScoreEntry> {
    let set: rustc_hash::FxHashSet<&Word> = candidates.iter().collect();
    entries
        .iter()
        .filter(|entry| set.contains(&entry.word))
        .cloned()
        .collect()
}
