//! Letter-combination heuristic
//!
//! A cheap approximate ranking used when exact scoring of the whole dictionary would
//! not finish in time. For every combination of `k` letters the candidates are split
//! by which of those letters they contain, and the split is scored like a partition,
//! discounted by how many letters each bucket confirms. A word then inherits the best
//! score of any kept combination whose letters it contains.
//!
//! The resulting order is coarse and is only used to build a shortlist for exact
//! re-scoring.

use super::budget::Budget;
use super::expected::ScoreEntry;
use crate::core::{ALPHABET_LEN, Hints, Word, letter_bit};
use indicatif::ProgressBar;
use itertools::Itertools;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// How much more knowing `n` present letters is worth than knowing none
///
/// Measured on five-letter words. Counts beyond the table reuse the last entry.
const PRESENT_WEIGHTS: [f64; 6] = [
    1.0,
    3.496_900_007_818_250_6,
    14.637_312_414_916_163,
    86.661_758_193_894_29,
    1_349.514_746_230_278_7,
    25_000.0,
];

/// Divisor applied once per combination letter that is already fixed
const FIXED_LETTER_DISCOUNT: f64 = 1.5;

/// Tuning for [`heuristic_scores`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicConfig {
    /// Allowance for each combination size; a size that would overrun is skipped
    pub section_budget: Budget,
    /// Best combinations kept per size
    pub keep_per_size: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            section_budget: Budget::new(Duration::from_secs(60)),
            keep_per_size: 1000,
        }
    }
}

/// A scored set of letters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterCombo {
    /// Letter-set mask
    pub letters: u32,
    pub score: f64,
}

/// Result of a heuristic pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicOutcome {
    /// Scored words in pool order; words no kept combination fits are left out
    pub scores: Vec<ScoreEntry>,
    /// Combination sizes abandoned because they would overrun their budget
    pub skipped_sizes: Vec<usize>,
}

impl HeuristicOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Weight for a bucket whose candidates contain `present` of the combination letters
#[must_use]
pub fn present_weight(present: u32) -> f64 {
    let index = (present as usize).min(PRESENT_WEIGHTS.len() - 1);
    PRESENT_WEIGHTS[index]
}

/// Score one letter combination against the candidates
///
/// Lower is better. `fixed_mask` holds the letters currently known to be correct
/// somewhere in the word.
#[must_use]
pub fn combination_score(combo: &[u8], candidates: &[Word], fixed_mask: u32) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut buckets = vec![0usize; 1 << combo.len()];
    for word in candidates {
        let index = combo
            .iter()
            .enumerate()
            .filter(|&(_, &letter)| word.has_letter(letter))
            .fold(0usize, |acc, (i, _)| acc | 1 << i);
        buckets[index] += 1;
    }

    let total = candidates.len() as f64;
    let mut score: f64 = buckets
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(index, &count)| {
            let count = count as f64;
            count * count / total / present_weight(index.count_ones())
        })
        .sum();

    for &letter in combo {
        if fixed_mask & letter_bit(letter) != 0 {
            score /= FIXED_LETTER_DISCOUNT;
        }
    }

    score
}

/// Best combinations of `size` letters, or `None` if the section overran its budget
#[must_use]
pub fn best_combinations(
    size: usize,
    candidates: &[Word],
    fixed_mask: u32,
    config: &HeuristicConfig,
    progress: &ProgressBar,
) -> Option<Vec<LetterCombo>> {
    let total = binomial(ALPHABET_LEN, size);
    let keep = config.keep_per_size.max(1);
    let deadline = config.section_budget.start();
    let done = AtomicUsize::new(0);
    let aborted = AtomicBool::new(false);

    progress.set_length(total as u64);
    progress.set_position(0);
    progress.set_message(format!("{size}-letter combinations"));

    (b'A'..=b'Z')
        .combinations(size)
        .par_bridge()
        .try_fold(Vec::new, |mut best: Vec<LetterCombo>, combo| {
            if aborted.load(Ordering::Relaxed) {
                return None;
            }
            if deadline.exceeded(done.load(Ordering::Relaxed), total) {
                aborted.store(true, Ordering::Relaxed);
                return None;
            }

            best.push(LetterCombo {
                letters: combo.iter().fold(0, |mask, &l| mask | letter_bit(l)),
                score: combination_score(&combo, candidates, fixed_mask),
            });
            done.fetch_add(1, Ordering::Relaxed);
            progress.inc(1);

            if best.len() >= 2 * keep {
                keep_best(&mut best, keep);
            }
            Some(best)
        })
        .try_reduce(Vec::new, |mut left, right| {
            left.extend(right);
            keep_best(&mut left, keep);
            Some(left)
        })
        .map(|mut best| {
            keep_best(&mut best, keep);
            best
        })
}

/// Sort ascending by score and truncate; ties fall back to the letter mask so the
/// outcome does not depend on thread scheduling
fn keep_best(combos: &mut Vec<LetterCombo>, keep: usize) {
    combos.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.letters.cmp(&b.letters)));
    combos.truncate(keep);
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k.min(n - k)).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Heuristic scores for every word in `pool`
///
/// Runs one section per combination size from 1 up to the word length, then gives
/// each pool word the lowest score among the kept combinations it fully contains.
#[must_use]
pub fn heuristic_scores(
    pool: &[Word],
    candidates: &[Word],
    hints: &Hints,
    config: &HeuristicConfig,
    progress: &ProgressBar,
) -> HeuristicOutcome {
    let Some(word_len) = candidates.first().map(Word::len) else {
        return HeuristicOutcome::default();
    };

    let fixed_mask = hints.fixed_letters_mask();
    let mut combos = Vec::new();
    let mut skipped_sizes = Vec::new();

    for size in 1..=word_len.min(ALPHABET_LEN) {
        match best_combinations(size, candidates, fixed_mask, config, progress) {
            Some(section) => combos.extend(section),
            None => skipped_sizes.push(size),
        }
    }

    combos.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.letters.cmp(&b.letters)));

    let scores = pool
        .par_iter()
        .filter_map(|word| {
            combos
                .iter()
                .find(|combo| word.contains_all(combo.letters))
                .map(|combo| ScoreEntry::new(word.clone(), combo.score))
        })
        .collect();

    HeuristicOutcome {
        scores,
        skipped_sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn candidates() -> Vec<Word> {
        words(&["apple", "grape", "stage", "crane", "share"])
    }

    fn unlimited() -> HeuristicConfig {
        HeuristicConfig {
            section_budget: Budget::unlimited(),
            keep_per_size: 1000,
        }
    }

    #[test]
    fn weights_reuse_last_entry() {
        assert!((present_weight(0) - 1.0).abs() < f64::EPSILON);
        assert!((present_weight(5) - 25_000.0).abs() < f64::EPSILON);
        assert!((present_weight(9) - 25_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn letter_in_every_candidate_is_weighted() {
        // Every candidate contains E, so all five land in the "present" bucket
        let score = combination_score(b"E", &candidates(), 0);
        assert!((score - 5.0 / present_weight(1)).abs() < 1e-9);

        // Nobody contains Z: one bucket, unweighted
        let score = combination_score(b"Z", &candidates(), 0);
        assert!((score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn fixed_letters_are_discounted() {
        let plain = combination_score(b"AE", &candidates(), 0);
        let one = combination_score(b"AE", &candidates(), letter_bit(b'E'));
        let both = combination_score(b"AE", &candidates(), letter_bit(b'A') | letter_bit(b'E'));
        assert!((plain / one - 1.5).abs() < 1e-9);
        assert!((plain / both - 2.25).abs() < 1e-9);
    }

    #[test]
    fn sections_keep_the_best_combinations() {
        let config = HeuristicConfig {
            keep_per_size: 10,
            ..unlimited()
        };
        let best = best_combinations(2, &candidates(), 0, &config, &ProgressBar::hidden())
            .unwrap();
        assert_eq!(best.len(), 10);
        assert!(best.windows(2).all(|w| w[0].score <= w[1].score));
        assert!(best.iter().all(|c| c.letters.count_ones() == 2));
    }

    #[test]
    fn binomial_counts_combinations() {
        assert_eq!(binomial(26, 1), 26);
        assert_eq!(binomial(26, 5), 65_780);
        assert_eq!(binomial(5, 6), 0);
    }

    #[test]
    fn shared_letters_beat_disjoint_letters() {
        let pool = words(&["stage", "buxom"]);
        let outcome = heuristic_scores(
            &pool,
            &candidates(),
            &Hints::new(),
            &unlimited(),
            &ProgressBar::hidden(),
        );

        assert!(outcome.skipped_sizes.is_empty());
        assert_eq!(outcome.scores.len(), 2);
        assert_eq!(outcome.scores[0].word.text(), "STAGE");
        assert!(outcome.scores[0].score < outcome.scores[1].score);
    }

    #[test]
    fn fixed_hints_change_the_ranking_input() {
        let mut hints = Hints::new();
        hints
            .record(&Word::new("stage").unwrap(), Pattern::parse("----G").unwrap())
            .unwrap();
        let pool = words(&["stage"]);
        let plain = heuristic_scores(&pool, &candidates(), &Hints::new(), &unlimited(), &ProgressBar::hidden());
        let fixed = heuristic_scores(&pool, &candidates(), &hints, &unlimited(), &ProgressBar::hidden());
        assert!(fixed.scores[0].score <= plain.scores[0].score);
    }

    #[test]
    fn overrun_sections_are_skipped() {
        let config = HeuristicConfig {
            section_budget: Budget::new(Duration::ZERO),
            keep_per_size: 1000,
        };
        let outcome = heuristic_scores(
            &candidates(),
            &candidates(),
            &Hints::new(),
            &config,
            &ProgressBar::hidden(),
        );
        assert!(outcome.is_empty());
        assert_eq!(outcome.skipped_sizes, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_candidates_no_scores() {
        let outcome = heuristic_scores(
            &candidates(),
            &[],
            &Hints::new(),
            &unlimited(),
            &ProgressBar::hidden(),
        );
        assert!(outcome.is_empty());
    }
}
