//! Opening-score precomputation
//!
//! Scores every dictionary word against the full dictionary and stores the result in
//! the score cache. Work is saved in batches, so an interrupted run resumes where it
//! stopped.

use crate::cache::{CacheError, OpeningScores, ScoreCache, length_key};
use crate::core::Word;
use crate::output::formatters::human_duration;
use crate::solver::Budget;
use crate::solver::expected::score_guesses;
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// Configuration for a precomputation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecomputeConfig {
    /// Words scored between saves
    pub save_every: usize,
}

impl Default for PrecomputeConfig {
    fn default() -> Self {
        Self { save_every: 50 }
    }
}

/// Summary of a precomputation run
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputeReport {
    pub word_len: usize,
    /// Words found in the cache before the run
    pub already_cached: usize,
    /// Words scored by this run
    pub scored: usize,
    pub saves: usize,
    /// Best opening after the run
    pub best: Option<(String, f64)>,
    pub duration: Duration,
}

/// Score every uncached opening word and save the results
///
/// # Errors
/// Returns `CacheError` if the cache cannot be read or written. Batches saved before
/// the failure are kept.
pub fn precompute_openings<C: ScoreCache + ?Sized>(
    dictionary: &[Word],
    cache: &mut C,
    config: &PrecomputeConfig,
    progress: &ProgressBar,
) -> Result<PrecomputeReport, CacheError> {
    let start = Instant::now();
    let word_len = dictionary.first().map_or(0, Word::len);
    let key = length_key(word_len);
    let mut scores: OpeningScores = cache.load(&key)?.unwrap_or_default();
    let already_cached = dictionary
        .iter()
        .filter(|word| scores.contains_key(word.text()))
        .count();

    let pending: Vec<Word> = dictionary
        .iter()
        .filter(|word| !scores.contains_key(word.text()))
        .cloned()
        .collect();

    let batch_progress = ProgressBar::hidden();
    progress.set_length(pending.len() as u64);
    progress.set_position(0);

    let mut scored = 0;
    let mut saves = 0;
    for batch in pending.chunks(config.save_every.max(1)) {
        let entries = score_guesses(batch, dictionary, &Budget::unlimited().start(), &batch_progress)
            .unwrap_or_default();
        for entry in entries {
            scores.insert(entry.word.text().to_owned(), entry.score);
        }
        cache.save(&key, &scores)?;
        scored += batch.len();
        saves += 1;

        progress.inc(batch.len() as u64);
        let elapsed = start.elapsed().as_secs_f64();
        let per_word = elapsed / scored as f64;
        let left = per_word * (pending.len() - scored) as f64;
        progress.set_message(format!(
            "{per_word:.2}s per word, {} left",
            eta_text(left)
        ));
    }

    progress.finish_with_message(format!("{} words scored", scores.len()));

    let best = dictionary
        .iter()
        .filter_map(|word| scores.get(word.text()).map(|&s| (word.text().to_owned(), s)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    Ok(PrecomputeReport {
        word_len,
        already_cached,
        scored,
        saves,
        best,
        duration: start.elapsed(),
    })
}

fn eta_text(seconds: f64) -> String {
    let text = human_duration(seconds);
    if text.is_empty() { "no time".to_owned() } else { text }
}
