//! Word lists for Wordle solving
//!
//! The embedded dictionary, plus loading from newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-delimited file
    File(PathBuf),
}

impl WordSource {
    /// Load the dictionary of words with `len` letters
    ///
    /// # Errors
    /// Returns an I/O error if a word file cannot be read.
    pub fn load(&self, len: usize) -> io::Result<Vec<Word>> {
        let words = match self {
            Self::Embedded => loader::words_from_slice(WORDS),
            Self::File(path) => loader::load_from_file(path)?,
        };
        Ok(loader::dictionary_of_length(words, len))
    }
}

impl FromStr for WordSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn source_parses_from_cli_text() {
        assert_eq!("embedded".parse::<WordSource>(), Ok(WordSource::Embedded));
        assert_eq!(
            "lists/words.txt".parse::<WordSource>(),
            Ok(WordSource::File(PathBuf::from("lists/words.txt")))
        );
    }

    #[test]
    fn embedded_source_loads_by_length() {
        assert_eq!(WordSource::Embedded.load(5).unwrap().len(), WORDS_COUNT);
        assert!(WordSource::Embedded.load(6).unwrap().is_empty());
    }
}
