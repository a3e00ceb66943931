//! Expected-remaining guess evaluation
//!
//! The score of a guess is the number of candidates expected to survive it. The
//! partition form is what the engine runs; the exhaustive form replays hypothetical
//! feedback through the constraint store and serves as its reference.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, expected_remaining, expected_remaining_exhaustive,
    shannon_entropy,
};
pub use selector::{ScoreEntry, only_candidates, rank, score_guesses};
