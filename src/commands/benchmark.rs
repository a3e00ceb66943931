//! Benchmark command
//!
//! Simulates games over a seeded sample of secrets and collects turn statistics.

use super::solve::{SimulationConfig, simulate};
use crate::cache::ScoreCache;
use crate::core::{SolveError, Word};
use crate::solver::Recommender;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Number of games solved in each turn count
    pub distribution: BTreeMap<usize, usize>,
    /// Hardest solved secrets, most guesses first
    pub hardest: Vec<(Word, usize)>,
    pub failures: Vec<(Word, SolveError)>,
    pub duration: Duration,
}

/// Draw `count` distinct secrets with a seeded RNG
#[must_use]
pub fn sample_secrets(dictionary: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    dictionary.choose_multiple(&mut rng, count).cloned().collect()
}

/// Simulate a game for every secret
pub fn run_benchmark<C: ScoreCache + ?Sized>(
    recommender: &Recommender<'_, C>,
    secrets: &[Word],
    config: &SimulationConfig,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut solved_turns: Vec<(Word, usize)> = Vec::new();
    let mut failures = Vec::new();
    // Secrets are given explicitly, so the RNG is never drawn from
    let mut rng = StdRng::seed_from_u64(0);

    progress.set_length(secrets.len() as u64);
    progress.set_position(0);

    for secret in secrets {
        match simulate(recommender, Some(secret), &mut rng, config) {
            Ok(result) => {
                *distribution.entry(result.turns()).or_insert(0) += 1;
                solved_turns.push((secret.clone(), result.turns()));

                let total: usize = solved_turns.iter().map(|(_, n)| n).sum();
                let avg = total as f64 / solved_turns.len() as f64;
                progress.set_message(format!("Avg: {avg:.2}"));
            }
            Err(e) => failures.push((secret.clone(), e)),
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let total_guesses: usize = solved_turns.iter().map(|(_, n)| n).sum();
    let solved = solved_turns.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest = solved_turns.clone();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(5);

    BenchmarkResult {
        total_words: secrets.len(),
        solved,
        total_guesses,
        average_guesses,
        min_guesses: solved_turns.iter().map(|(_, n)| *n).min().unwrap_or(0),
        max_guesses: solved_turns.iter().map(|(_, n)| *n).max().unwrap_or(0),
        distribution,
        hardest,
        failures,
        duration: start.elapsed(),
    }
}
