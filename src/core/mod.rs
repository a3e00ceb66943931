//! Core domain types for Wordle
//!
//! Words, feedback patterns and the constraint store. Everything here is pure and
//! has no dependencies beyond the standard library.

mod error;
mod hints;
mod pattern;
mod word;

pub use error::SolveError;
pub use hints::{Hint, HintKind, Hints};
pub use pattern::{Pattern, Verdict, evaluate};
pub use word::{ALPHABET_LEN, MAX_WORD_LEN, Word, WordError, letter_bit};
