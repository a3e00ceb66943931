//! Feedback calculation and representation
//!
//! A pattern encodes the feedback for every position of a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Position `i` contributes digit × 3^i to the packed value.

use super::error::SolveError;
use super::word::{MAX_WORD_LEN, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the secret, but not here
    Present,
    /// Letter does not occur in the secret
    Absent,
}

impl Verdict {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and `R`/`-`/`_`/`B`/`X`/⬜/⬛ for absent.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'R' | 'r' | '-' | '_' | 'B' | 'b' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Single-character rendering used by `Pattern`'s `Display`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji tile for this verdict
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for one guess
///
/// Stores the packed base-3 value together with the word length, so patterns of
/// different lengths never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u32,
    len: u8,
}

const fn pow3(exp: usize) -> u32 {
    let mut result = 1;
    let mut i = 0;
    while i < exp {
        result *= 3;
        i += 1;
    }
    result
}

/// Check the secret and guess lengths, then calculate the feedback
///
/// # Errors
/// Returns `SolveError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_expect::core::{Word, evaluate};
///
/// let secret = Word::new("crate").unwrap();
/// let guess = Word::new("trace").unwrap();
/// assert_eq!(evaluate(&secret, &guess).unwrap().to_string(), "YGGYG");
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<Pattern, SolveError> {
    if secret.len() != guess.len() {
        return Err(SolveError::LengthMismatch {
            expected: secret.len(),
            found: guess.len(),
        });
    }
    Ok(Pattern::calculate(secret, guess))
}

impl Pattern {
    /// Create a pattern from a packed value
    ///
    /// # Panics
    /// Panics in debug mode if `len` is too long or `value` has digits past `len`
    #[inline]
    #[must_use]
    pub const fn new(value: u32, len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LEN);
        debug_assert!(value < pow3(len));
        Self {
            value,
            len: len as u8,
        }
    }

    /// The all-correct pattern for a word length
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self::new(pow3(len) - 1, len)
    }

    /// Build a pattern from individual verdicts
    ///
    /// # Panics
    /// Panics if more than `MAX_WORD_LEN` verdicts are supplied
    #[must_use]
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        assert!(verdicts.len() <= MAX_WORD_LEN, "too many verdicts");
        let value = verdicts
            .iter()
            .rev()
            .fold(0, |acc, verdict| acc * 3 + verdict.digit());
        Self::new(value, verdicts.len())
    }

    /// Get the raw packed value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of positions
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.value == pow3(self.len as usize) - 1
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Uses the simplified scheme: a letter that is not in the right place is
    /// `Present` whenever it occurs anywhere in the secret. Duplicate guess letters
    /// are not capped by the number of occurrences in the secret, which keeps the
    /// feedback consistent with `Hints::matches`.
    ///
    /// Callers must ensure both words have the same length; use [`evaluate`] otherwise.
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        debug_assert_eq!(secret.len(), guess.len());

        let mut value = 0;
        for (&s, &g) in secret.bytes().iter().zip(guess.bytes()).rev() {
            let digit = if s == g {
                2
            } else if secret.has_letter(g) {
                1
            } else {
                0
            };
            value = value * 3 + digit;
        }

        Self::new(value, guess.len())
    }

    /// Verdict at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn verdict(self, position: usize) -> Verdict {
        assert!(position < self.len(), "position out of range");
        Verdict::from_digit(self.value / pow3(position) % 3)
    }

    /// Iterate verdicts from the first position to the last
    pub fn verdicts(self) -> impl Iterator<Item = Verdict> {
        let mut val = self.value;
        (0..self.len()).map(move |_| {
            let verdict = Verdict::from_digit(val % 3);
            val /= 3;
            verdict
        })
    }

    /// Count the positions carrying a given verdict
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.verdicts().filter(|&v| v == verdict).count()
    }

    /// Parse a pattern from a string like "GY-RG" or "🟩🟨⬜⬜🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_expect::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GYRRG").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYQ").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let verdicts: Vec<Verdict> = s
            .trim()
            .chars()
            .map(Verdict::from_char)
            .collect::<Option<_>>()?;

        if verdicts.is_empty() || verdicts.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_verdicts(&verdicts))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.verdicts().map(Verdict::to_emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.verdicts() {
            write!(f, "{}", verdict.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn perfect_pattern() {
        let p = Pattern::perfect(5);
        assert_eq!(p.value(), 242); // 2 + 2×3 + 2×9 + 2×27 + 2×81
        assert!(p.is_perfect());
        assert_eq!(p.count(Verdict::Correct), 5);
        assert!(Pattern::perfect(3).is_perfect());
        assert_ne!(Pattern::perfect(3), Pattern::perfect(5));
    }

    #[test]
    fn all_absent() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count(Verdict::Absent), 5);
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for text in ["crane", "slate", "zzzzz", "cat", "wordles"] {
            let w = word(text);
            assert!(Pattern::calculate(&w, &w).is_perfect());
        }
    }

    #[test]
    fn trace_against_crate() {
        // T present, R correct, A correct, C present, E correct
        let pattern = evaluate(&word("crate"), &word("trace")).unwrap();
        let verdicts: Vec<Verdict> = pattern.verdicts().collect();
        assert_eq!(
            verdicts,
            [
                Verdict::Present,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Correct,
            ]
        );
        assert_eq!(pattern.to_string(), "YGGYG");
    }

    #[test]
    fn duplicate_guess_letters_are_all_present() {
        // CRANE has a single E, yet both leading E's of EERIE report present
        let pattern = evaluate(&word("crane"), &word("eerie")).unwrap();
        assert_eq!(pattern.to_string(), "YYY-G");
    }

    #[test]
    fn duplicate_letter_beside_a_correct_one() {
        // SPEED vs ERASE: S present, P absent, both E's present, D absent
        let pattern = evaluate(&word("erase"), &word("speed")).unwrap();
        assert_eq!(pattern.to_string(), "Y-YY-");
    }

    #[test]
    fn correct_iff_letters_match() {
        let words = ["crane", "slate", "speed", "abbey", "geese", "robot", "floor"];
        for s in words {
            for g in words {
                let (secret, guess) = (word(s), word(g));
                let pattern = evaluate(&secret, &guess).unwrap();
                assert_eq!(pattern.len(), 5);
                for (i, verdict) in pattern.verdicts().enumerate() {
                    let same = secret.char_at(i) == guess.char_at(i);
                    assert_eq!(verdict == Verdict::Correct, same, "{s} vs {g} at {i}");
                    if !same {
                        let expected = if secret.has_letter(guess.char_at(i)) {
                            Verdict::Present
                        } else {
                            Verdict::Absent
                        };
                        assert_eq!(verdict, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn length_mismatch_fails_fast() {
        let err = evaluate(&word("crane"), &word("cranes")).unwrap_err();
        assert_eq!(
            err,
            SolveError::LengthMismatch {
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn verdict_lookup_by_position() {
        let pattern = Pattern::parse("G-Y").unwrap();
        assert_eq!(pattern.verdict(0), Verdict::Correct);
        assert_eq!(pattern.verdict(1), Verdict::Absent);
        assert_eq!(pattern.verdict(2), Verdict::Present);
    }

    #[test]
    fn parse_accepts_all_symbol_sets() {
        let p1 = Pattern::parse("GYR--").unwrap();
        let p2 = Pattern::parse("gy_bx").unwrap();
        let p3 = Pattern::parse("🟩🟨⬜⬛⬜").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // G=2, Y=1 → 2 + 1×3 = 5
        assert_eq!(p1.value(), 5);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse("GXQ").is_none());
        assert!(Pattern::parse("GGGGGGGGGGGGGGGGG").is_none()); // 17 positions
        assert!("GZ".parse::<Pattern>().is_err());
    }

    #[test]
    fn emoji_rendering() {
        let pattern = Pattern::parse("GY-").unwrap();
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let pattern = evaluate(&word("crane"), &word("react")).unwrap();
        assert_eq!(Pattern::parse(&pattern.to_string()), Some(pattern));
    }
}
