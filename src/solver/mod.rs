//! Wordle solving algorithms
//!
//! Candidate filtering, expected-remaining scoring, the letter-combination heuristic
//! and the engine that ties them together under a time budget.

pub mod budget;
mod engine;
pub mod expected;
mod filter;
pub mod heuristic;
mod session;

pub use budget::{Budget, Deadline, Infeasible};
pub use engine::{Method, RecommendConfig, Recommendation, Recommender};
pub use expected::{GuessMetrics, ScoreEntry};
pub use filter::{FilterStrategy, filter_candidates};
pub use heuristic::{HeuristicConfig, HeuristicOutcome};
pub use session::Session;
