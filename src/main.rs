//! Wordle Expect - CLI
//!
//! Recommends Wordle guesses by the expected number of words they leave, and plays,
//! simulates and benchmarks games with that strategy.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use wordle_expect::{
    cache::{JsonFileCache, NoCache, ScoreCache},
    commands::{
        PrecomputeConfig, SimulationConfig, analyze_word, parse_feedback, precompute_openings,
        recommend_after, run_benchmark, run_play, run_practice, sample_secrets, simulate,
    },
    core::{Pattern, Word},
    output::{
        formatters::{progress_bar, spinner},
        print_analysis_result, print_benchmark_result, print_candidates, print_precompute_report,
        print_recommendation, print_simulation,
    },
    solver::{Budget, RecommendConfig, Recommender, Session},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_expect",
    about = "Wordle solver that minimises the expected number of remaining words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordSource,

    /// Word length to play with
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Seconds allowed for exhaustive scoring before falling back to the heuristic
    #[arg(short, long, global = true, default_value = "120")]
    budget: u64,

    /// Opening score cache file
    #[arg(long, global = true, default_value = "opening_scores.json")]
    cache: PathBuf,

    /// Ignore the opening score cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Number of guesses to list
    #[arg(short, long, global = true, default_value = "20")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Assist with a game played elsewhere (default)
    Play,

    /// Play against a hidden secret
    Practice {
        /// Seed for picking the secret
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Let the solver play a game
    Solve {
        /// The secret (random if omitted)
        word: Option<String>,

        /// Seed for picking a random secret
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate games over a sample of secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for sampling secrets
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Score a single guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Feedback so far, as guess=pattern (e.g. crane=--G-G)
        #[arg(short, long)]
        feedback: Vec<String>,
    },

    /// Recommend guesses after the given feedback
    Recommend {
        /// Feedback so far, as guess=pattern (e.g. crane=--G-G); repeat per guess
        #[arg(short, long)]
        feedback: Vec<String>,
    },

    /// Score every opening guess and store the results in the cache
    Precompute {
        /// Words scored between cache writes
        #[arg(long, default_value = "50")]
        save_every: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = cli
        .wordlist
        .load(cli.length)
        .with_context(|| format!("Failed to load word list {:?}", cli.wordlist))?;
    if dictionary.is_empty() {
        bail!("The word list has no {}-letter words", cli.length);
    }

    let mut json_cache = JsonFileCache::new(cli.cache.clone());
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Precompute { save_every } = command {
        return run_precompute_command(&dictionary, &mut json_cache, save_every);
    }

    let cache: &dyn ScoreCache = if cli.no_cache { &NoCache } else { &json_cache };
    let config = RecommendConfig {
        budget: Budget::new(Duration::from_secs(cli.budget)),
        top_n: cli.top,
        ..RecommendConfig::default()
    };
    let recommender = Recommender::new(&dictionary, cache, config);

    match command {
        Commands::Play => {
            run_play(&recommender, &mut io::stdin().lock())?;
            Ok(())
        }
        Commands::Practice { seed } => {
            let mut rng = seeded_rng(seed);
            run_practice(&recommender, &mut rng, &mut io::stdin().lock())?;
            Ok(())
        }
        Commands::Solve {
            word,
            seed,
            verbose,
        } => run_solve_command(&recommender, word.as_deref(), seed, verbose),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&recommender, count, seed);
            Ok(())
        }
        Commands::Analyze { word, feedback } => {
            run_analyze_command(&dictionary, &word, &feedback)
        }
        Commands::Recommend { feedback } => run_recommend_command(&recommender, &feedback),
        Commands::Precompute { .. } => Ok(()),
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn parse_all_feedback(entries: &[String]) -> Result<Vec<(Word, Pattern)>> {
    entries
        .iter()
        .map(|entry| parse_feedback(entry).map_err(anyhow::Error::msg))
        .collect()
}

fn run_solve_command(
    recommender: &Recommender<'_, dyn ScoreCache + '_>,
    word: Option<&str>,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let secret = word.map(Word::new).transpose()?;
    let mut rng = seeded_rng(seed);
    let result = simulate(
        recommender,
        secret.as_ref(),
        &mut rng,
        &SimulationConfig::default(),
    )?;
    print_simulation(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    recommender: &Recommender<'_, dyn ScoreCache + '_>,
    count: usize,
    seed: u64,
) {
    let secrets = sample_secrets(recommender.dictionary(), count, seed);
    println!("Running benchmark on {} random words...", secrets.len());

    let progress = progress_bar(secrets.len() as u64);
    let result = run_benchmark(
        recommender,
        &secrets,
        &SimulationConfig::default(),
        &progress,
    );
    print_benchmark_result(&result);
}

fn run_analyze_command(dictionary: &[Word], word: &str, feedback: &[String]) -> Result<()> {
    let mut session = Session::new(dictionary);
    for (guess, pattern) in parse_all_feedback(feedback)? {
        session.apply(guess, pattern)?;
    }
    let result = analyze_word(word, dictionary, session.candidates())?;
    print_analysis_result(&result);
    Ok(())
}

fn run_recommend_command(
    recommender: &Recommender<'_, dyn ScoreCache + '_>,
    feedback: &[String],
) -> Result<()> {
    let feedback = parse_all_feedback(feedback)?;
    let progress = spinner("Scoring guesses");
    let (session, recommendation) = recommend_after(recommender, &feedback, &progress)?;
    progress.finish_and_clear();

    print_candidates(session.candidates());
    print_recommendation(&recommendation, session.candidates().len());
    Ok(())
}

fn run_precompute_command(
    dictionary: &[Word],
    cache: &mut JsonFileCache,
    save_every: usize,
) -> Result<()> {
    println!(
        "Scoring {} opening words into {}",
        dictionary.len(),
        cache.path().display()
    );
    let progress = progress_bar(dictionary.len() as u64);
    let report = precompute_openings(
        dictionary,
        cache,
        &PrecomputeConfig { save_every },
        &progress,
    )
    .context("Failed to update the score cache")?;
    print_precompute_report(&report);
    Ok(())
}
