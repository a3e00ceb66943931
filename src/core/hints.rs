//! Accumulated constraints from feedback
//!
//! Every verdict becomes one tagged hint:
//! - `Fixed`: the letter sits at this position
//! - `Required`: the letter occurs in the word, but not at this position
//! - `Excluded`: the letter was reported absent at this position
//!
//! A letter is *pinned* once it appears in a `Fixed` or `Required` hint. An excluded
//! letter that is not pinned is banned from the whole word; a pinned one is only
//! banned from the position it was reported at. Pinning is resolved when matching,
//! so the order in which feedback arrives never changes the outcome.

use super::error::SolveError;
use super::pattern::{Pattern, Verdict};
use super::word::{Word, letter_bit};

/// The three categories of knowledge a verdict can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    Fixed,
    Required,
    Excluded,
}

/// A single constraint on the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    pub kind: HintKind,
    /// Uppercase ASCII letter
    pub letter: u8,
    /// Zero-based position the verdict was reported at
    pub position: usize,
}

impl From<Verdict> for HintKind {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Fixed,
            Verdict::Present => Self::Required,
            Verdict::Absent => Self::Excluded,
        }
    }
}

/// Constraint store built from every guess and its feedback
///
/// Append-only: hints are never retracted. Use [`Hints::with_feedback`] to derive an
/// independent copy, which is how scratch stores for hypothetical feedback are made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    len: Option<usize>,
    fixed: Vec<(u8, usize)>,
    required: Vec<(u8, usize)>,
    excluded: Vec<(u8, usize)>,
    /// Letters appearing in `fixed` or `required`
    pinned: u32,
    /// Letters appearing in `excluded`
    absent: u32,
}

impl Hints {
    /// Empty store: every word matches
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the feedback for one guess
    ///
    /// Recording the same guess and pattern twice leaves the store unchanged.
    ///
    /// # Errors
    /// - `LengthMismatch` if the pattern and guess lengths differ, or the guess length
    ///   differs from earlier guesses
    /// - `Contradiction` if the feedback conflicts with earlier hints; the store is
    ///   left untouched in that case
    pub fn record(&mut self, guess: &Word, pattern: Pattern) -> Result<(), SolveError> {
        if pattern.len() != guess.len() {
            return Err(SolveError::LengthMismatch {
                expected: guess.len(),
                found: pattern.len(),
            });
        }
        if let Some(len) = self.len
            && len != guess.len()
        {
            return Err(SolveError::LengthMismatch {
                expected: len,
                found: guess.len(),
            });
        }

        let hints: Vec<Hint> = guess
            .bytes()
            .iter()
            .zip(pattern.verdicts())
            .enumerate()
            .map(|(position, (&letter, verdict))| Hint {
                kind: verdict.into(),
                letter,
                position,
            })
            .collect();

        if let Some(conflict) = hints.iter().find(|hint| self.conflicts_with(hint)) {
            return Err(SolveError::Contradiction {
                letter: char::from(conflict.letter),
                position: conflict.position,
            });
        }

        self.len = Some(guess.len());
        for hint in hints {
            let entry = (hint.letter, hint.position);
            let (list, mask) = match hint.kind {
                HintKind::Fixed => (&mut self.fixed, &mut self.pinned),
                HintKind::Required => (&mut self.required, &mut self.pinned),
                HintKind::Excluded => (&mut self.excluded, &mut self.absent),
            };
            if !list.contains(&entry) {
                list.push(entry);
            }
            *mask |= letter_bit(hint.letter);
        }

        Ok(())
    }

    /// Copy of this store with one more guess recorded
    ///
    /// # Errors
    /// Same as [`Hints::record`].
    pub fn with_feedback(&self, guess: &Word, pattern: Pattern) -> Result<Self, SolveError> {
        let mut hints = self.clone();
        hints.record(guess, pattern)?;
        Ok(hints)
    }

    fn conflicts_with(&self, hint: &Hint) -> bool {
        let (letter, position) = (hint.letter, hint.position);
        match hint.kind {
            HintKind::Fixed => {
                self.required.contains(&(letter, position))
                    || self.excluded.contains(&(letter, position))
                    || self.fixed.iter().any(|&(l, p)| p == position && l != letter)
            }
            HintKind::Required | HintKind::Excluded => self.fixed.contains(&(letter, position)),
        }
    }

    /// Check whether a word is consistent with every hint
    ///
    /// # Examples
    /// ```
    /// use wordle_expect::core::{Hints, Word, evaluate};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    ///
    /// let mut hints = Hints::new();
    /// hints.record(&guess, evaluate(&secret, &guess).unwrap()).unwrap();
    ///
    /// assert!(hints.matches(&secret));
    /// assert!(hints.matches(&Word::new("plate").unwrap()));
    /// assert!(!hints.matches(&Word::new("crate").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if self.len.is_some_and(|len| len != word.len()) {
            return false;
        }

        self.matches_fixed(word) && self.matches_required(word) && self.matches_excluded(word)
    }

    pub(crate) fn matches_fixed(&self, word: &Word) -> bool {
        let bytes = word.bytes();
        self.fixed.iter().all(|&(letter, position)| bytes[position] == letter)
    }

    pub(crate) fn matches_required(&self, word: &Word) -> bool {
        let bytes = word.bytes();
        self.required
            .iter()
            .all(|&(letter, position)| word.has_letter(letter) && bytes[position] != letter)
    }

    pub(crate) fn matches_excluded(&self, word: &Word) -> bool {
        if word.letter_mask() & self.absent & !self.pinned != 0 {
            return false;
        }

        let bytes = word.bytes();
        self.excluded
            .iter()
            .filter(|&&(letter, _)| self.is_pinned(letter))
            .all(|&(letter, position)| bytes[position] != letter)
    }

    /// Check whether a letter has a `Fixed` or `Required` hint
    #[inline]
    #[must_use]
    pub const fn is_pinned(&self, letter: u8) -> bool {
        self.pinned & letter_bit(letter) != 0
    }

    /// Word length the hints apply to, once any feedback was recorded
    #[must_use]
    pub const fn word_len(&self) -> Option<usize> {
        self.len
    }

    /// `(letter, position)` pairs known to be correct
    #[must_use]
    pub fn fixed(&self) -> &[(u8, usize)] {
        &self.fixed
    }

    /// `(letter, position)` pairs known to be present but misplaced
    #[must_use]
    pub fn required(&self) -> &[(u8, usize)] {
        &self.required
    }

    /// `(letter, position)` pairs reported absent
    #[must_use]
    pub fn excluded(&self) -> &[(u8, usize)] {
        &self.excluded
    }

    /// Letters banned from the whole word, in the order they were first reported
    #[must_use]
    pub fn excluded_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = Vec::new();
        for &(letter, _) in &self.excluded {
            if !self.is_pinned(letter) && !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        letters
    }

    /// Letter-set mask of every `Fixed` letter
    #[must_use]
    pub fn fixed_letters_mask(&self) -> u32 {
        self.fixed
            .iter()
            .fold(0, |mask, &(letter, _)| mask | letter_bit(letter))
    }

    /// Iterate all hints, fixed first, then required, then excluded
    pub fn iter(&self) -> impl Iterator<Item = Hint> + '_ {
        let tag = |kind: HintKind| {
            move |&(letter, position): &(u8, usize)| Hint {
                kind,
                letter,
                position,
            }
        };
        self.fixed
            .iter()
            .map(tag(HintKind::Fixed))
            .chain(self.required.iter().map(tag(HintKind::Required)))
            .chain(self.excluded.iter().map(tag(HintKind::Excluded)))
    }

    /// Total number of hints
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixed.len() + self.required.len() + self.excluded.len()
    }

    /// True when no feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
