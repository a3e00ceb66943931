//! Wordle word representation
//!
//! A Word stores an uppercase word along with a letter-set mask for fast containment checks.

use std::fmt;

/// Longest word the solver accepts
///
/// Patterns are packed base-3 into a `u32`, and 3^16 leaves plenty of headroom.
pub const MAX_WORD_LEN: usize = 16;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// An uppercase word of fixed length
///
/// The length is whatever the dictionary provides. Every operation that combines two
/// words checks that their lengths agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be 1 to {MAX_WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Bit for a single uppercase letter in a letter-set mask
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'A')
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or longer than `MAX_WORD_LEN`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_expect::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mask = text.bytes().fold(0, |mask, b| mask | letter_bit(b));

        Ok(Self { text, mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.mask & letter_bit(letter) != 0
    }

    /// Set of letters in the word, bit `n` for the `n`th letter of the alphabet
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.mask
    }

    /// Check if every letter of `mask` appears somewhere in the word
    #[inline]
    #[must_use]
    pub const fn contains_all(&self, mask: u32) -> bool {
        self.mask & mask == mask
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
