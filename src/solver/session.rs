//! A solving session
//!
//! Owns the constraint store, the candidates it allows and the guesses played so
//! far. Feedback is applied to a copy of the store and only committed once it leaves
//! at least one candidate.

use super::filter::{FilterStrategy, filter_candidates};
use crate::core::{Hints, Pattern, SolveError, Word};

/// State of one game being solved
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a [Word],
    candidates: Vec<Word>,
    hints: Hints,
    history: Vec<(Word, Pattern)>,
    strategy: FilterStrategy,
}

impl<'a> Session<'a> {
    /// Fresh session where every dictionary word is a candidate
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            candidates: dictionary.to_vec(),
            hints: Hints::new(),
            history: Vec::new(),
            strategy: FilterStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: FilterStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Apply the feedback for one guess, returning the number of candidates left
    ///
    /// # Errors
    /// - `LengthMismatch` if the guess or pattern has the wrong length
    /// - `Contradiction` if the feedback conflicts with earlier feedback
    /// - `EmptyCandidateSet` if no candidate is consistent with it
    ///
    /// The session is unchanged when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use wordle_expect::core::{Pattern, Word};
    /// use wordle_expect::solver::Session;
    ///
    /// let dictionary: Vec<Word> = ["crane", "slate", "plate", "buxom"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let mut session = Session::new(&dictionary);
    /// let left = session
    ///     .apply(Word::new("crane").unwrap(), Pattern::parse("--G-G").unwrap())
    ///     .unwrap();
    /// assert_eq!(left, 2);
    /// assert!(session.apply(Word::new("buxom").unwrap(), Pattern::parse("GGGGG").unwrap()).is_err());
    /// assert_eq!(session.candidates().len(), 2);
    /// ```
    pub fn apply(&mut self, guess: Word, pattern: Pattern) -> Result<usize, SolveError> {
        if let Some(expected) = self.word_len()
            && expected != guess.len()
        {
            return Err(SolveError::LengthMismatch {
                expected,
                found: guess.len(),
            });
        }

        let hints = self.hints.with_feedback(&guess, pattern)?;
        let candidates = filter_candidates(&self.candidates, &hints, self.strategy);
        if candidates.is_empty() {
            return Err(SolveError::EmptyCandidateSet);
        }

        self.hints = hints;
        self.candidates = candidates;
        self.history.push((guess, pattern));
        Ok(self.candidates.len())
    }

    /// Take back the last guess by replaying the ones before it
    ///
    /// # Errors
    /// Only fails if replaying previously accepted feedback fails, which leaves the
    /// session as it was.
    pub fn undo(&mut self) -> Result<Option<(Word, Pattern)>, SolveError> {
        let Some((last, earlier)) = self.history.split_last() else {
            return Ok(None);
        };

        let mut replay = Self::new(self.dictionary).with_strategy(self.strategy);
        for (guess, pattern) in earlier {
            replay.apply(guess.clone(), *pattern)?;
        }

        let last = last.clone();
        *self = replay;
        Ok(Some(last))
    }

    /// Forget every guess
    pub fn reset(&mut self) {
        *self = Self::new(self.dictionary).with_strategy(self.strategy);
    }

    /// Look up a typed word in the dictionary
    ///
    /// # Errors
    /// - `Word` if the text is not a valid word
    /// - `UnknownWord` if it is valid but not in the dictionary
    pub fn lookup(&self, text: &str) -> Result<Word, SolveError> {
        let word = Word::new(text)?;
        if self.dictionary.contains(&word) {
            Ok(word)
        } else {
            Err(SolveError::UnknownWord(word.text().to_owned()))
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn hints(&self) -> &Hints {
        &self.hints
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// True before any feedback has been applied
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.history.is_empty()
    }

    /// True once the last guess was entirely correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, pattern)| pattern.is_perfect())
    }

    /// Word length of the dictionary
    #[must_use]
    pub fn word_len(&self) -> Option<usize> {
        self.dictionary.first().map(Word::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn play(session: &mut Session<'_>, secret: &Word, guess: &str) -> usize {
        let guess = word(guess);
        let pattern = evaluate(secret, &guess).unwrap();
        session.apply(guess, pattern).unwrap()
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let dictionary = words_from_slice(WORDS);
        let secret = word("crane");
        let mut session = Session::new(&dictionary);
        assert!(session.is_fresh());

        let mut previous = session.candidates().to_vec();
        for guess in ["slate", "robot", "ocean", "crane"] {
            let left = play(&mut session, &secret, guess);
            assert!(left <= previous.len());
            assert!(session.candidates().iter().all(|w| previous.contains(w)));
            assert!(session.candidates().contains(&secret));
            previous = session.candidates().to_vec();
        }

        assert!(session.is_solved());
        assert_eq!(session.candidates(), [secret]);
    }

    #[test]
    fn rejected_feedback_leaves_session_untouched() {
        let dictionary = words_from_slice(WORDS);
        let mut session = Session::new(&dictionary);
        play(&mut session, &word("crane"), "slate");
        let before = session.candidates().to_vec();

        // Consistent with the hints so far, but no dictionary word fits
        let err = session
            .apply(word("quake"), Pattern::perfect(5))
            .unwrap_err();
        assert_eq!(err, SolveError::EmptyCandidateSet);
        assert_eq!(session.candidates(), before.as_slice());
        assert_eq!(session.history().len(), 1);

        let err = session
            .apply(word("cat"), Pattern::parse("---").unwrap())
            .unwrap_err();
        assert!(matches!(err, SolveError::LengthMismatch { .. }));
    }

    #[test]
    fn undo_replays_history() {
        let dictionary = words_from_slice(WORDS);
        let secret = word("truth");
        let mut session = Session::new(&dictionary);

        play(&mut session, &secret, "slate");
        let after_first = session.candidates().to_vec();
        let hints_after_first = session.hints().clone();
        play(&mut session, &secret, "robot");

        let undone = session.undo().unwrap().unwrap();
        assert_eq!(undone.0, word("robot"));
        assert_eq!(session.candidates(), after_first.as_slice());
        assert_eq!(session.hints(), &hints_after_first);

        session.undo().unwrap();
        assert!(session.is_fresh());
        assert_eq!(session.candidates().len(), dictionary.len());
        assert_eq!(session.undo().unwrap(), None);
    }

    #[test]
    fn reset_restores_dictionary() {
        let dictionary = words_from_slice(WORDS);
        let mut session = Session::new(&dictionary).with_strategy(FilterStrategy::Predicate);
        play(&mut session, &word("whose"), "crane");
        session.reset();
        assert!(session.is_fresh());
        assert!(session.hints().is_empty());
        assert_eq!(session.candidates(), dictionary.as_slice());
    }

    #[test]
    fn lookup_requires_dictionary_words() {
        let dictionary = words_from_slice(&["crane", "slate"]);
        let session = Session::new(&dictionary);
        assert_eq!(session.lookup("Crane").unwrap(), word("crane"));
        assert_eq!(
            session.lookup("plate").unwrap_err(),
            SolveError::UnknownWord("PLATE".to_owned())
        );
        assert!(matches!(
            session.lookup("pl4te").unwrap_err(),
            SolveError::Word(_)
        ));
    }
}
