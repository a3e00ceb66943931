//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod precompute;
pub mod recommend;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use precompute::{PrecomputeConfig, PrecomputeReport, precompute_openings};
pub use recommend::{parse_feedback, recommend_after};
pub use simple::{GameSummary, run_play, run_practice};
pub use solve::{GuessStep, SimulationConfig, SimulationResult, choose_guess, simulate};
