//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, human_duration};
use crate::commands::{AnalysisResult, BenchmarkResult, PrecomputeReport, SimulationResult};
use crate::core::Word;
use crate::solver::{Recommendation, ScoreEntry};
use colored::Colorize;

/// Candidate lists longer than this are summarised by their size
const LIST_LIMIT: usize = 10;

/// Print the remaining candidates, or just how many there are
pub fn print_candidates(candidates: &[Word]) {
    if candidates.len() > LIST_LIMIT {
        println!("{} possible words", candidates.len().to_string().bright_yellow());
        return;
    }
    let listed: Vec<&str> = candidates.iter().map(Word::text).collect();
    println!(
        "{} possible words: {}",
        candidates.len().to_string().bright_yellow(),
        listed.join(", ")
    );
}

fn print_entries(title: &str, entries: &[ScoreEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("\n{}", title.bright_cyan().bold());
    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "  {:>2}. {}  {}",
            rank + 1,
            entry.word.text().bright_white().bold(),
            format!("{:.3}", entry.score).bright_yellow()
        );
    }
}

/// Print both ranked lists of a recommendation
pub fn print_recommendation(recommendation: &Recommendation, candidate_count: usize) {
    if let Some(error) = &recommendation.cache_error {
        println!("{} {error}", "Score cache unavailable:".yellow());
    }
    if let Some(overrun) = &recommendation.overrun {
        println!(
            "{} {overrun}; ranked a shortlist instead",
            "Exhaustive search skipped:".yellow()
        );
    }

    print_entries("Best guesses (expected words remaining):", &recommendation.best_guesses);
    if candidate_count > 1 {
        print_entries("Best possible answers:", &recommendation.best_candidates);
    }
    println!("\n  Method: {}", recommendation.method.to_string().bright_black());
}

/// Print the turns of a simulated game
pub fn print_simulation(result: &SimulationResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.guess, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Expected:   {:.2} remaining ({})",
                step.expected_remaining, step.method
            );
        }
    }

    println!();
    if result.solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {} guesses", result.turns())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Expected:    {} words remain",
        format!("{:.3}", result.metrics.expected_remaining).bright_yellow()
    );
    println!("   Worst case:  {} words remain", result.metrics.max_partition);
    println!("   Entropy:     {:.3} bits", result.metrics.entropy);
    if result.is_candidate {
        println!("   {}", "Could be the answer".green());
    } else {
        println!("   {}", "Cannot be the answer".bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = result.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {guesses:>2}: {} {count:4}", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.hardest {
            println!("   {} ({guesses} guesses)", word.text());
        }
    }

    if !result.failures.is_empty() {
        println!("\n{}", "Failures:".red().bold());
        for (word, error) in &result.failures {
            println!("   {}: {error}", word.text());
        }
    }
}

/// Print what a precompute run did
pub fn print_precompute_report(report: &PrecomputeReport) {
    println!("\n{}", "Opening scores".bright_cyan().bold());
    println!("   Word length:     {}", report.word_len);
    println!("   Already cached:  {}", report.already_cached);
    println!("   Newly scored:    {}", report.scored);
    println!("   Cache writes:    {}", report.saves);
    let took = human_duration(report.duration.as_secs_f64());
    println!(
        "   Time taken:      {}",
        if took.is_empty() { "under a second" } else { took.as_str() }
    );
    if let Some((word, score)) = &report.best {
        println!(
            "   Best opening:    {} ({})",
            word.to_uppercase().bright_white().bold(),
            format!("{score:.3}").bright_yellow()
        );
    }
}
