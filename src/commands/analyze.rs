//! Word analysis command
//!
//! Scores one word exactly against the current candidates.

use crate::core::{SolveError, Word};
use crate::solver::GuessMetrics;
use crate::solver::expected::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Whether the word could still be the secret
    pub is_candidate: bool,
}

/// Analyze a dictionary word against a set of candidates
///
/// # Errors
/// - `Word` if the text is not a valid word
/// - `UnknownWord` if the word is not in the dictionary
/// - `LengthMismatch` if the word length differs from the candidates'
/// - `EmptyCandidateSet` if there are no candidates
pub fn analyze_word(
    word: &str,
    dictionary: &[Word],
    candidates: &[Word],
) -> Result<AnalysisResult, SolveError> {
    let word = Word::new(word)?;
    if !dictionary.contains(&word) {
        return Err(SolveError::UnknownWord(word.text().to_owned()));
    }
    let Some(first) = candidates.first() else {
        return Err(SolveError::EmptyCandidateSet);
    };
    if first.len() != word.len() {
        return Err(SolveError::LengthMismatch {
            expected: first.len(),
            found: word.len(),
        });
    }

    Ok(AnalysisResult {
        metrics: calculate_metrics(&word, candidates),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&word),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(&WORDS[..100]);
        let first = WORDS[0];

        let result = analyze_word(first, &words, &words).unwrap();

        assert_eq!(result.word, Word::new(first).unwrap());
        assert!(result.is_candidate);
        assert_eq!(result.total_candidates, 100);
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= 100.0);
        assert!(result.metrics.max_partition >= 1);
    }

    #[test]
    fn analyze_against_subset() {
        let dictionary = words_from_slice(&["stage", "apple", "grape", "crane", "share", "buxom"]);
        let result = analyze_word("buxom", &dictionary, &dictionary[..5]).unwrap();

        assert!(!result.is_candidate);
        assert!((result.metrics.expected_remaining - 5.0).abs() < 1e-9);
        assert_eq!(result.metrics.max_partition, 5);
        assert!(result.metrics.entropy.abs() < 1e-9);
    }

    #[test]
    fn analyze_rejects_unknown_and_invalid_words() {
        let words = words_from_slice(&["crane", "slate"]);
        assert_eq!(
            analyze_word("plate", &words, &words).unwrap_err(),
            SolveError::UnknownWord("PLATE".to_owned())
        );
        assert!(matches!(
            analyze_word("cr4ne", &words, &words).unwrap_err(),
            SolveError::Word(_)
        ));
        assert_eq!(
            analyze_word("crane", &words, &[]).unwrap_err(),
            SolveError::EmptyCandidateSet
        );
    }
}
