//! Wordle Expect
//!
//! A Wordle solver that ranks guesses by the expected number of words left after the
//! feedback comes back. Exhaustive scoring is used while it fits a time budget; beyond
//! that a letter-frequency heuristic picks a shortlist to score exactly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_expect::core::{Pattern, Word};
//! use wordle_expect::solver::expected::expected_remaining;
//!
//! let secret = Word::new("slate").unwrap();
//! let guess = Word::new("crane").unwrap();
//! let pattern = Pattern::calculate(&secret, &guess);
//! assert_eq!(pattern.to_string(), "--G-G");
//!
//! let candidates = [secret, Word::new("plate").unwrap()];
//! assert!((expected_remaining(&guess, &candidates) - 2.0).abs() < 1e-9);
//! ```

// Score cache for opening guesses
pub mod cache;

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
