//! Self-play simulation
//!
//! Plays a game against a known (or randomly drawn) secret, taking every guess from
//! the recommendation engine.

use crate::cache::ScoreCache;
use crate::core::{Pattern, SolveError, Word, evaluate};
use crate::solver::{Method, Recommendation, Recommender, ScoreEntry, Session};
use indicatif::ProgressBar;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Configuration for a simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Give up after this many guesses
    pub max_turns: usize,
    /// On the first two turns, play the best overall guess while more than this many
    /// candidates remain
    pub explore_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_turns: 20,
            explore_threshold: 20,
        }
    }
}

/// A single guess step in a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected remaining candidates the engine gave this guess
    pub expected_remaining: f64,
    pub method: Method,
}

/// Result of a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub secret: Word,
    pub steps: Vec<GuessStep>,
}

impl SimulationResult {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.steps.last().is_some_and(|step| step.pattern.is_perfect())
    }
}

/// Pick the guess to play from a recommendation
///
/// Early turns favour the best overall guess while many candidates remain; turn 3
/// takes it only when it splits the candidates perfectly and no candidate does; every
/// other turn plays the best guess that could still win.
#[must_use]
pub fn choose_guess<'r>(
    turn: usize,
    recommendation: &'r Recommendation,
    remaining: usize,
    config: &SimulationConfig,
) -> Option<&'r ScoreEntry> {
    let overall = recommendation.best();
    let candidate = recommendation.best_candidate().or(overall);

    let explore = match turn {
        1 | 2 => remaining > config.explore_threshold,
        3 => {
            overall.is_some_and(|o| (o.score - 1.0).abs() < f64::EPSILON)
                && candidate.is_some_and(|c| c.score > 1.0)
        }
        _ => false,
    };

    if explore { overall.or(candidate) } else { candidate }
}

/// Simulate a game
///
/// The RNG is only used to draw a secret when none is given, so the game is fully
/// determined by the secret.
///
/// # Errors
/// - `UnknownWord` if `secret` is not in the dictionary
/// - `EmptyCandidateSet` if the dictionary is empty
/// - `TurnLimit` if the secret is not found within `config.max_turns` guesses
pub fn simulate<C, R>(
    recommender: &Recommender<'_, C>,
    secret: Option<&Word>,
    rng: &mut R,
    config: &SimulationConfig,
) -> Result<SimulationResult, SolveError>
where
    C: ScoreCache + ?Sized,
    R: Rng + ?Sized,
{
    let dictionary = recommender.dictionary();
    let secret = match secret {
        Some(word) if dictionary.contains(word) => word.clone(),
        Some(word) => return Err(SolveError::UnknownWord(word.text().to_owned())),
        None => dictionary
            .choose(rng)
            .cloned()
            .ok_or(SolveError::EmptyCandidateSet)?,
    };

    let progress = ProgressBar::hidden();
    let mut session = Session::new(dictionary);
    let mut steps = Vec::new();

    for turn in 1..=config.max_turns {
        let candidates_before = session.candidates().len();
        let recommendation = recommender.recommend(session.candidates(), session.hints(), &progress)?;
        let choice = choose_guess(turn, &recommendation, candidates_before, config)
            .ok_or(SolveError::EmptyCandidateSet)?;

        let guess = choice.word.clone();
        let pattern = evaluate(&secret, &guess)?;
        let candidates_after = session.apply(guess.clone(), pattern)?;

        steps.push(GuessStep {
            guess,
            pattern,
            candidates_before,
            candidates_after,
            expected_remaining: choice.score,
            method: recommendation.method,
        });

        if pattern.is_perfect() {
            return Ok(SimulationResult { secret, steps });
        }
    }

    Err(SolveError::TurnLimit(config.max_turns))
}
