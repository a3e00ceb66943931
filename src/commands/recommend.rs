//! Non-interactive recommendation from a list of feedback entries

use crate::cache::ScoreCache;
use crate::core::{Pattern, SolveError, Word};
use crate::solver::{Recommendation, Recommender, Session};
use indicatif::ProgressBar;

/// Parse one `GUESS=PATTERN` entry, e.g. `crane=YR--G`
///
/// # Errors
/// Returns a message describing the malformed part.
///
/// # Examples
/// ```
/// use wordle_expect::commands::recommend::parse_feedback;
///
/// let (guess, pattern) = parse_feedback("crane=YR--G").unwrap();
/// assert_eq!(guess.text(), "CRANE");
/// assert_eq!(pattern.to_string(), "Y---G");
/// assert!(parse_feedback("crane").is_err());
/// ```
pub fn parse_feedback(entry: &str) -> Result<(Word, Pattern), String> {
    let (guess, pattern) = entry
        .split_once('=')
        .ok_or_else(|| format!("Expected GUESS=PATTERN, got '{entry}'"))?;

    let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let pattern = Pattern::parse(pattern)
        .ok_or_else(|| format!("Invalid pattern '{pattern}': use G, Y and R or -"))?;

    if pattern.len() != guess.len() {
        return Err(format!(
            "Pattern '{pattern}' has {} letters but '{guess}' has {}",
            pattern.len(),
            guess.len()
        ));
    }

    Ok((guess, pattern))
}

/// Apply the feedback in order, then recommend the next guess
///
/// # Errors
/// Returns the first `SolveError` raised while applying feedback or recommending.
pub fn recommend_after<'a, C: ScoreCache + ?Sized>(
    recommender: &Recommender<'a, C>,
    feedback: &[(Word, Pattern)],
    progress: &ProgressBar,
) -> Result<(Session<'a>, Recommendation), SolveError> {
    let mut session = Session::new(recommender.dictionary());
    for (guess, pattern) in feedback {
        session.apply(guess.clone(), *pattern)?;
    }

    let recommendation = recommender.recommend(session.candidates(), session.hints(), progress)?;
    Ok((session, recommendation))
}
