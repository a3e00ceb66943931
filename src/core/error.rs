//! Errors raised by the solving core

use super::word::WordError;
use std::fmt;

/// Error type for solving operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Two words (or a word and a pattern) disagree in length
    LengthMismatch { expected: usize, found: usize },
    /// No dictionary word is consistent with the feedback so far
    EmptyCandidateSet,
    /// Feedback pins a letter and position in incompatible ways
    Contradiction { letter: char, position: usize },
    /// Word is well-formed but not in the dictionary
    UnknownWord(String),
    /// A simulated game ran past its turn cap
    TurnLimit(usize),
    /// Malformed word input
    Word(WordError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "Expected a {expected}-letter word, got {found} letters")
            }
            Self::EmptyCandidateSet => {
                write!(f, "No candidates remain; the feedback may be incorrect")
            }
            Self::Contradiction { letter, position } => write!(
                f,
                "Feedback for '{letter}' at position {} contradicts earlier feedback",
                position + 1
            ),
            Self::UnknownWord(word) => write!(f, "Word '{word}' is not in the word list"),
            Self::TurnLimit(turns) => write!(f, "Gave up after {turns} guesses"),
            Self::Word(e) => write!(f, "Invalid word: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for SolveError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}
