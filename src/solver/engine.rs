//! Recommendation engine
//!
//! Produces the best guesses overall and the best guesses that could still be the
//! secret. The exact score of every dictionary word is tried first; when that would
//! overrun the budget a letter-combination heuristic builds a shortlist that is then
//! scored exactly.

use super::budget::{Budget, Infeasible};
use super::expected::{ScoreEntry, only_candidates, rank, score_guesses};
use super::heuristic::{HeuristicConfig, heuristic_scores};
use crate::cache::{CacheError, OpeningScores, ScoreCache, length_key};
use crate::core::{Hints, SolveError, Word};
use indicatif::ProgressBar;
use rustc_hash::FxHashSet;
use std::fmt;

/// Tuning for [`Recommender`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Allowance for exact scoring of the whole dictionary
    pub budget: Budget,
    pub heuristic: HeuristicConfig,
    /// Length of each returned list
    pub top_n: usize,
    /// Heuristic picks re-scored exactly, taken once from all guesses and once from
    /// the candidates
    pub shortlist: usize,
    /// Candidates scored when neither exact nor heuristic scoring finished
    pub fallback_pool: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            budget: Budget::default(),
            heuristic: HeuristicConfig::default(),
            top_n: 20,
            shortlist: 100,
            fallback_pool: 100,
        }
    }
}

/// How a recommendation was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Only one candidate was left
    Single,
    /// Precomputed opening scores
    Cached,
    /// Every dictionary word scored exactly
    Exhaustive,
    /// Heuristic shortlist, scored exactly
    Heuristic,
    /// A prefix of the candidates, scored exactly
    Fallback,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single candidate",
            Self::Cached => "cached opening scores",
            Self::Exhaustive => "exhaustive",
            Self::Heuristic => "heuristic shortlist",
            Self::Fallback => "candidate fallback",
        };
        f.write_str(name)
    }
}

/// Ranked guesses, best first
#[derive(Debug)]
pub struct Recommendation {
    pub best_guesses: Vec<ScoreEntry>,
    /// Best guesses that are still possible secrets
    pub best_candidates: Vec<ScoreEntry>,
    pub method: Method,
    /// Why exact scoring of the dictionary was abandoned
    pub overrun: Option<Infeasible>,
    /// Cache read failure; the recommendation was computed live instead
    pub cache_error: Option<CacheError>,
}

impl Recommendation {
    /// The single best guess
    #[must_use]
    pub fn best(&self) -> Option<&ScoreEntry> {
        self.best_guesses.first()
    }

    /// The best guess that could win this turn
    #[must_use]
    pub fn best_candidate(&self) -> Option<&ScoreEntry> {
        self.best_candidates.first()
    }
}

/// Ranks guesses from a dictionary
pub struct Recommender<'a, C: ScoreCache + ?Sized> {
    dictionary: &'a [Word],
    cache: &'a C,
    config: RecommendConfig,
}

impl<'a, C: ScoreCache + ?Sized> Recommender<'a, C> {
    pub const fn new(dictionary: &'a [Word], cache: &'a C, config: RecommendConfig) -> Self {
        Self {
            dictionary,
            cache,
            config,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Recommend guesses for the current candidates
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` when no candidate is left.
    ///
    /// # Examples
    /// ```
    /// use indicatif::ProgressBar;
    /// use wordle_expect::cache::NoCache;
    /// use wordle_expect::core::{Hints, Word};
    /// use wordle_expect::solver::{Method, RecommendConfig, Recommender};
    ///
    /// let dictionary: Vec<Word> = ["stage", "apple", "grape", "crane", "share", "buxom"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let candidates = dictionary[..5].to_vec();
    ///
    /// let recommender = Recommender::new(&dictionary, &NoCache, RecommendConfig::default());
    /// let rec = recommender
    ///     .recommend(&candidates, &Hints::new(), &ProgressBar::hidden())
    ///     .unwrap();
    ///
    /// assert_eq!(rec.method, Method::Exhaustive);
    /// assert_eq!(rec.best().unwrap().word.text(), "STAGE");
    /// ```
    pub fn recommend(
        &self,
        candidates: &[Word],
        hints: &Hints,
        progress: &ProgressBar,
    ) -> Result<Recommendation, SolveError> {
        match candidates {
            [] => return Err(SolveError::EmptyCandidateSet),
            [only] => {
                let entry = ScoreEntry::new(only.clone(), 1.0);
                return Ok(self.finish(vec![entry], candidates, Method::Single));
            }
            _ => {}
        }

        let mut cache_error = None;
        if candidates.len() == self.dictionary.len() {
            match self.cached_scores(candidates[0].len()) {
                Ok(Some(entries)) => return Ok(self.finish(entries, candidates, Method::Cached)),
                Ok(None) => {}
                Err(e) => cache_error = Some(e),
            }
        }

        progress.set_message("Scoring every guess");
        let deadline = self.config.budget.start();
        let mut recommendation = match score_guesses(self.dictionary, candidates, &deadline, progress) {
            Ok(entries) => self.finish(entries, candidates, Method::Exhaustive),
            Err(overrun) => {
                let mut rec = self.shortlisted(candidates, hints, progress);
                rec.overrun = Some(overrun);
                rec
            }
        };

        recommendation.cache_error = cache_error;
        Ok(recommendation)
    }

    /// Opening scores for the whole dictionary, if the cache covers every word
    fn cached_scores(&self, len: usize) -> Result<Option<Vec<ScoreEntry>>, CacheError> {
        let Some(scores) = self.cache.load(&length_key(len))? else {
            return Ok(None);
        };
        Ok(entries_from_cache(&scores, self.dictionary))
    }

    fn shortlisted(&self, candidates: &[Word], hints: &Hints, progress: &ProgressBar) -> Recommendation {
        let mut outcome =
            heuristic_scores(self.dictionary, candidates, hints, &self.config.heuristic, progress);

        let (pool, method) = if outcome.is_empty() {
            let take = self.config.fallback_pool.max(1).min(candidates.len());
            (candidates[..take].to_vec(), Method::Fallback)
        } else {
            rank(&mut outcome.scores);
            let overall = outcome.scores.iter().take(self.config.shortlist);
            let possible = only_candidates(&outcome.scores, candidates);
            let picked: FxHashSet<&Word> = overall
                .chain(possible.iter().take(self.config.shortlist))
                .map(|entry| &entry.word)
                .collect();
            let pool = self
                .dictionary
                .iter()
                .filter(|word| picked.contains(word))
                .cloned()
                .collect();
            (pool, Method::Heuristic)
        };

        progress.set_message("Scoring shortlist");
        let entries = score_guesses(&pool, candidates, &Budget::unlimited().start(), progress)
            .unwrap_or_default();
        self.finish(entries, candidates, method)
    }

    fn finish(&self, mut entries: Vec<ScoreEntry>, candidates: &[Word], method: Method) -> Recommendation {
        rank(&mut entries);
        let mut best_candidates = only_candidates(&entries, candidates);
        best_candidates.truncate(self.config.top_n);
        entries.truncate(self.config.top_n);

        Recommendation {
            best_guesses: entries,
            best_candidates,
            method,
            overrun: None,
            cache_error: None,
        }
    }
}

/// Scores for every dictionary word in dictionary order, or `None` if any is missing
fn entries_from_cache(scores: &OpeningScores, dictionary: &[Word]) -> Option<Vec<ScoreEntry>> {
    dictionary
        .iter()
        .map(|word| {
            scores
                .get(word.text())
                .map(|&score| ScoreEntry::new(word.clone(), score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::solver::expected::expected_remaining;
    use std::time::Duration;

    fn dictionary() -> Vec<Word> {
        ["stage", "apple", "grape", "crane", "share", "buxom"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    fn recommend_with<C: ScoreCache + ?Sized>(
        dictionary: &[Word],
        candidates: &[Word],
        cache: &C,
        config: RecommendConfig,
    ) -> Result<Recommendation, SolveError> {
        Recommender::new(dictionary, cache, config).recommend(
            candidates,
            &Hints::new(),
            &ProgressBar::hidden(),
        )
    }

    struct BrokenCache;

    impl ScoreCache for BrokenCache {
        fn load(&self, _key: &str) -> Result<Option<OpeningScores>, CacheError> {
            Err(CacheError::UnsupportedVersion(0))
        }

        fn save(&mut self, _key: &str, _scores: &OpeningScores) -> Result<(), CacheError> {
            Err(CacheError::UnsupportedVersion(0))
        }
    }

    #[test]
    fn empty_candidates_are_an_error() {
        let words = dictionary();
        let err = recommend_with(&words, &[], &MemoryCache::new(), RecommendConfig::default())
            .unwrap_err();
        assert_eq!(err, SolveError::EmptyCandidateSet);
    }

    #[test]
    fn single_candidate_short_circuits() {
        let words = dictionary();
        let config = RecommendConfig {
            budget: Budget::new(Duration::ZERO),
            ..RecommendConfig::default()
        };
        let rec = recommend_with(&words, &words[..1], &BrokenCache, config).unwrap();

        assert_eq!(rec.method, Method::Single);
        assert_eq!(rec.best_guesses.len(), 1);
        assert_eq!(rec.best().unwrap().word.text(), "STAGE");
        assert!((rec.best().unwrap().score - 1.0).abs() < f64::EPSILON);
        assert_eq!(rec.best_candidates, rec.best_guesses);
        assert!(rec.cache_error.is_none());
    }

    #[test]
    fn cached_opening_is_recommended_first() {
        let words = dictionary();
        let mut cache = MemoryCache::new();
        let scores: OpeningScores = words
            .iter()
            .map(|w| (w.text().to_owned(), if w.text() == "CRANE" { 0.5 } else { 3.0 }))
            .collect();
        cache.save(&length_key(5), &scores).unwrap();

        let rec = recommend_with(&words, &words, &cache, RecommendConfig::default()).unwrap();
        assert_eq!(rec.method, Method::Cached);
        assert_eq!(rec.best().unwrap().word.text(), "CRANE");
        assert_eq!(rec.best_candidate().unwrap().word.text(), "CRANE");
    }

    #[test]
    fn partial_cache_is_ignored() {
        let words = dictionary();
        let mut cache = MemoryCache::new();
        let scores: OpeningScores = [("CRANE".to_owned(), 0.5)].into_iter().collect();
        cache.save(&length_key(5), &scores).unwrap();

        let rec = recommend_with(&words, &words, &cache, RecommendConfig::default()).unwrap();
        assert_eq!(rec.method, Method::Exhaustive);
    }

    #[test]
    fn cache_errors_fall_through_to_live_scoring() {
        let words = dictionary();
        let rec = recommend_with(&words, &words, &BrokenCache, RecommendConfig::default()).unwrap();
        assert_eq!(rec.method, Method::Exhaustive);
        assert!(matches!(
            rec.cache_error,
            Some(CacheError::UnsupportedVersion(0))
        ));
    }

    #[test]
    fn exhaustive_ranks_informative_guesses_first() {
        let words = dictionary();
        let candidates = &words[..5];
        let rec = recommend_with(&words, candidates, &MemoryCache::new(), RecommendConfig::default())
            .unwrap();

        assert_eq!(rec.method, Method::Exhaustive);
        assert!(rec.overrun.is_none());
        assert_eq!(rec.best().unwrap().word.text(), "STAGE");
        assert_eq!(rec.best_guesses.last().unwrap().word.text(), "BUXOM");
        assert!(rec.best_candidates.iter().all(|e| candidates.contains(&e.word)));
        assert!(rec.best_guesses.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn lists_are_truncated() {
        let words = dictionary();
        let config = RecommendConfig {
            top_n: 2,
            ..RecommendConfig::default()
        };
        let rec = recommend_with(&words, &words[..5], &MemoryCache::new(), config).unwrap();
        assert_eq!(rec.best_guesses.len(), 2);
        assert_eq!(rec.best_candidates.len(), 2);
    }

    #[test]
    fn overrun_uses_heuristic_shortlist() {
        let words = dictionary();
        let candidates = &words[..5];
        let config = RecommendConfig {
            budget: Budget::new(Duration::ZERO),
            heuristic: HeuristicConfig {
                section_budget: Budget::unlimited(),
                keep_per_size: 1000,
            },
            ..RecommendConfig::default()
        };
        let rec = recommend_with(&words, candidates, &MemoryCache::new(), config).unwrap();

        assert_eq!(rec.method, Method::Heuristic);
        assert!(rec.overrun.is_some());
        let best = rec.best().unwrap();
        assert_eq!(best.word.text(), "STAGE");
        // Shortlisted words carry exact scores
        for entry in &rec.best_guesses {
            let exact = expected_remaining(&entry.word, candidates);
            assert!((entry.score - exact).abs() < 1e-9);
        }
    }

    #[test]
    fn fallback_when_nothing_finishes() {
        let words = dictionary();
        let candidates = &words[..5];
        let config = RecommendConfig {
            budget: Budget::new(Duration::ZERO),
            heuristic: HeuristicConfig {
                section_budget: Budget::new(Duration::ZERO),
                keep_per_size: 1000,
            },
            fallback_pool: 3,
            ..RecommendConfig::default()
        };
        let rec = recommend_with(&words, candidates, &MemoryCache::new(), config).unwrap();

        assert_eq!(rec.method, Method::Fallback);
        assert_eq!(rec.best_guesses.len(), 3);
        assert!(rec.best_guesses.iter().all(|e| candidates[..3].contains(&e.word)));
        assert_eq!(rec.best().unwrap().word.text(), "STAGE");
    }
}
