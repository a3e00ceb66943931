//! Formatting utilities for terminal output

use crate::core::{Pattern, Verdict, Word};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Longest span [`human_duration`] will describe, in seconds
const MAX_DESCRIBED_SECONDS: f64 = 1e11;

const UNITS: [(&str, u64); 4] = [("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)];

/// Describe a number of seconds in words, e.g. `1 hour, 2 minutes, and 5 seconds`
///
/// Fractions of a second are dropped. Returns an empty string for spans under a
/// second and for values that are negative, not finite or absurdly large.
///
/// # Examples
/// ```
/// use wordle_expect::output::formatters::human_duration;
///
/// assert_eq!(human_duration(3725.0), "1 hour, 2 minutes, and 5 seconds");
/// assert_eq!(human_duration(86_400.0), "1 day");
/// assert_eq!(human_duration(0.4), "");
/// ```
#[must_use]
pub fn human_duration(seconds: f64) -> String {
    if !seconds.is_finite() || !(0.0..=MAX_DESCRIBED_SECONDS).contains(&seconds) {
        return String::new();
    }

    // Bounded above, so the cast cannot truncate
    let mut left = seconds.floor() as u64;
    let parts: Vec<String> = UNITS
        .iter()
        .filter_map(|&(name, size)| {
            let count = left / size;
            left %= size;
            match count {
                0 => None,
                1 => Some(format!("1 {name}")),
                n => Some(format!("{n} {name}s")),
            }
        })
        .collect();

    match parts.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Render a guess as coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.verdicts())
        .map(|(letter, verdict)| {
            let tile = format!(" {letter} ");
            match verdict {
                Verdict::Correct => tile.black().on_green().to_string(),
                Verdict::Present => tile.black().on_yellow().to_string(),
                Verdict::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a text bar
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a known amount of work
#[must_use]
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb
}

/// Spinner with a message, for work whose size is found out later
#[must_use]
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {prefix} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_prefix(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
