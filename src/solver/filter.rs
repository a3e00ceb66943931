//! Candidate filtering
//!
//! Two interchangeable ways of shrinking a candidate list to the words consistent
//! with a set of hints. They must always agree; the narrowing form is usually faster
//! on large lists because each pass only touches survivors of the previous one.

use crate::core::{Hints, Word};
use rayon::prelude::*;

/// How candidates are checked against hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterStrategy {
    /// Check every hint category for each word in turn
    Predicate,
    /// Narrow the list by fixed hints, then required hints, then excluded hints
    #[default]
    Narrowing,
}

/// Keep the candidates consistent with `hints`, preserving their order
///
/// # Examples
/// ```
/// use wordle_expect::core::{Hints, Pattern, Word};
/// use wordle_expect::solver::{FilterStrategy, filter_candidates};
///
/// let words: Vec<Word> = ["crane", "slate", "plate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut hints = Hints::new();
/// hints.record(&words[0], Pattern::parse("--G-G").unwrap()).unwrap();
///
/// let kept = filter_candidates(&words, &hints, FilterStrategy::Narrowing);
/// assert_eq!(kept, filter_candidates(&words, &hints, FilterStrategy::Predicate));
/// assert_eq!(kept.len(), 2);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], hints: &Hints, strategy: FilterStrategy) -> Vec<Word> {
    match strategy {
        FilterStrategy::Predicate => candidates
            .par_iter()
            .filter(|word| hints.matches(word))
            .cloned()
            .collect(),
        FilterStrategy::Narrowing => narrow(candidates, hints),
    }
}

fn narrow(candidates: &[Word], hints: &Hints) -> Vec<Word> {
    let right_length: Vec<&Word> = match hints.word_len() {
        Some(len) => candidates.iter().filter(|w| w.len() == len).collect(),
        None => candidates.iter().collect(),
    };

    let fixed: Vec<&Word> = right_length
        .into_par_iter()
        .filter(|w| hints.matches_fixed(w))
        .collect();

    let required: Vec<&Word> = fixed
        .into_par_iter()
        .filter(|w| hints.matches_required(w))
        .collect();

    required
        .into_par_iter()
        .filter(|w| hints.matches_excluded(w))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, evaluate};
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use std::collections::HashSet;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn as_set(words: &[Word]) -> HashSet<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn strategies_agree_for_simulated_feedback() {
        let dictionary = words_from_slice(WORDS);
        let secrets = ["crane", "speed", "abbey", "ocean", "truth", "whose"];
        let guesses = ["slate", "eerie", "robot", "geese", "lares"];

        for secret in secrets {
            let secret = word(secret);
            let mut hints = Hints::new();
            for guess in guesses {
                let guess = word(guess);
                hints
                    .record(&guess, evaluate(&secret, &guess).unwrap())
                    .unwrap();

                let predicate = filter_candidates(&dictionary, &hints, FilterStrategy::Predicate);
                let narrowing = filter_candidates(&dictionary, &hints, FilterStrategy::Narrowing);
                assert_eq!(as_set(&predicate), as_set(&narrowing));
                assert!(predicate.contains(&secret));
            }
        }
    }

    #[test]
    fn strategies_agree_for_hand_entered_feedback() {
        let dictionary = words_from_slice(WORDS);
        let feedback = [
            ("speed", "--Y-Y"),
            ("crane", "-Y--G"),
            ("adieu", "Y-YYY"),
            ("geese", "---G-"),
        ];

        for (guess, pattern) in feedback {
            let mut hints = Hints::new();
            hints
                .record(&word(guess), Pattern::parse(pattern).unwrap())
                .unwrap();
            let predicate = filter_candidates(&dictionary, &hints, FilterStrategy::Predicate);
            let narrowing = filter_candidates(&dictionary, &hints, FilterStrategy::Narrowing);
            assert_eq!(as_set(&predicate), as_set(&narrowing), "{guess} {pattern}");
        }
    }

    #[test]
    fn filtering_preserves_order() {
        let words: Vec<Word> = ["plate", "crane", "slate", "state"]
            .into_iter()
            .map(word)
            .collect();
        let mut hints = Hints::new();
        hints
            .record(&word("irate"), Pattern::parse("--GGG").unwrap())
            .unwrap();

        let kept = filter_candidates(&words, &hints, FilterStrategy::Narrowing);
        let texts: Vec<&str> = kept.iter().map(Word::text).collect();
        assert_eq!(texts, ["PLATE", "SLATE", "STATE"]);
    }

    #[test]
    fn empty_hints_keep_everything() {
        let words = words_from_slice(&["crane", "slate"]);
        let kept = filter_candidates(&words, &Hints::new(), FilterStrategy::Predicate);
        assert_eq!(kept, words);
    }

    #[test]
    fn other_lengths_are_dropped() {
        let words = vec![word("crane"), word("cat"), word("slate")];
        let mut hints = Hints::new();
        hints
            .record(&word("crane"), Pattern::parse("-----").unwrap())
            .unwrap();
        for strategy in [FilterStrategy::Predicate, FilterStrategy::Narrowing] {
            assert!(filter_candidates(&words, &hints, strategy).is_empty());
        }
    }
}
