//! Interactive text modes
//!
//! `play` assists with a game being played elsewhere: it tracks the feedback you
//! enter and recommends guesses on request. `practice` hides a secret and scores
//! your guesses against it.

use crate::cache::ScoreCache;
use crate::core::{Pattern, SolveError, Word, evaluate};
use crate::output::display::{print_candidates, print_recommendation};
use crate::output::formatters::{colored_guess, spinner};
use crate::solver::{Recommender, Session};
use colored::Colorize;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io::{self, BufRead, Write};

/// What happened to the last game of an interactive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub history: Vec<(Word, Pattern)>,
    /// The secret, once it is known
    pub solution: Option<Word>,
}

/// Run the feedback assistant until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
#[allow(clippy::too_many_lines)] // Interactive loop with several commands
pub fn run_play<C: ScoreCache + ?Sized>(
    recommender: &Recommender<'_, C>,
    input: &mut dyn BufRead,
) -> io::Result<GameSummary> {
    println!("\n{}", "Wordle assistant".bright_cyan().bold());
    println!("Enter each guess you played, then its feedback:");
    println!("  G/g/🟩 correct, Y/y/🟨 wrong position, R/r/-/⬜ not in word");
    println!("Commands: 'analyse', 'undo', 'new', 'quit'\n");

    let mut session = Session::new(recommender.dictionary());

    loop {
        if let [only] = session.candidates() {
            println!(
                "\n{} {}",
                "Word found:".green().bold(),
                only.text().bright_green().bold()
            );
            let solution = Some(only.clone());
            match prompt(input, "Play again? (y/n)")? {
                Some(answer) if answer.to_lowercase().starts_with('y') => {
                    session.reset();
                    println!("\nNew game started!\n");
                    continue;
                }
                _ => {
                    return Ok(GameSummary {
                        history: session.history().to_vec(),
                        solution,
                    });
                }
            }
        }

        print_candidates(session.candidates());

        let Some(command) = prompt(input, "Guess (or command)")? else {
            return Ok(summary(&session));
        };

        match command.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(summary(&session)),
            "analyse" | "analyze" | "a" => analyse(recommender, &session),
            "undo" | "u" => match session.undo() {
                Ok(Some((guess, _))) => println!("Took back {guess}\n"),
                Ok(None) => println!("Nothing to undo!\n"),
                Err(e) => println!("{}", e.to_string().red()),
            },
            "new" | "n" => {
                session.reset();
                println!("\nNew game started!\n");
            }
            text => {
                let guess = match session.lookup(text) {
                    Ok(guess) => guess,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };

                let Some(pattern) = read_pattern(input, guess.len())? else {
                    return Ok(summary(&session));
                };

                match session.apply(guess.clone(), pattern) {
                    Ok(left) => println!("{}  {left} candidates left\n", colored_guess(&guess, pattern)),
                    Err(SolveError::EmptyCandidateSet) => println!(
                        "{}",
                        "No candidates fit that feedback; it was not applied.".red()
                    ),
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
        }
    }
}

/// Play one practice game against a random secret
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_practice<C: ScoreCache + ?Sized, R: Rng + ?Sized>(
    recommender: &Recommender<'_, C>,
    rng: &mut R,
    input: &mut dyn BufRead,
) -> io::Result<GameSummary> {
    let Some(secret) = recommender.dictionary().choose(rng).cloned() else {
        println!("{}", "The word list is empty.".red());
        return Ok(GameSummary {
            history: Vec::new(),
            solution: None,
        });
    };

    println!("\n{}", "Practice game".bright_cyan().bold());
    println!(
        "Guess the {}-letter word. Commands: 'analyse', 'give up'\n",
        secret.len()
    );

    let mut session = Session::new(recommender.dictionary());

    loop {
        let turn = session.history().len() + 1;
        let Some(text) = prompt(input, &format!("Guess {turn}"))? else {
            return Ok(summary(&session));
        };

        match text.to_lowercase().as_str() {
            "" => continue,
            "analyse" | "analyze" | "a" => {
                analyse(recommender, &session);
                continue;
            }
            "give up" | "quit" | "q" => {
                println!("The word was {}", secret.text().bright_yellow().bold());
                return Ok(GameSummary {
                    history: session.history().to_vec(),
                    solution: Some(secret),
                });
            }
            _ => {}
        }

        let guess = match session.lookup(&text) {
            Ok(guess) => guess,
            Err(e) => {
                println!("{}", e.to_string().yellow());
                continue;
            }
        };

        let pattern = match evaluate(&secret, &guess) {
            Ok(pattern) => pattern,
            Err(e) => {
                println!("{}", e.to_string().yellow());
                continue;
            }
        };
        println!("{}  {}", colored_guess(&guess, pattern), pattern.to_emoji());

        if let Err(e) = session.apply(guess, pattern) {
            println!("{}", e.to_string().red());
        }

        if session.is_solved() {
            let turns = session.history().len();
            println!(
                "\n{} Guessed in {} {}",
                "Well done!".green().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
            return Ok(GameSummary {
                history: session.history().to_vec(),
                solution: Some(secret),
            });
        }

        print_candidates(session.candidates());
    }
}

fn analyse<C: ScoreCache + ?Sized>(recommender: &Recommender<'_, C>, session: &Session<'_>) {
    let progress = spinner("Analysing");
    let result = recommender.recommend(session.candidates(), session.hints(), &progress);
    progress.finish_and_clear();

    match result {
        Ok(recommendation) => print_recommendation(&recommendation, session.candidates().len()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn summary(session: &Session<'_>) -> GameSummary {
    GameSummary {
        history: session.history().to_vec(),
        solution: session
            .history()
            .last()
            .filter(|(_, pattern)| pattern.is_perfect())
            .map(|(word, _)| word.clone()),
    }
}

/// Keep asking until a pattern of the right length is entered; `None` at end of input
fn read_pattern(input: &mut dyn BufRead, len: usize) -> io::Result<Option<Pattern>> {
    loop {
        let Some(text) = prompt(input, "Feedback (e.g. GYR-G)")? else {
            return Ok(None);
        };
        match Pattern::parse(&text) {
            Some(pattern) if pattern.len() == len => return Ok(Some(pattern)),
            Some(_) => println!("{}", format!("Feedback needs {len} letters").yellow()),
            None => println!("{}", "Invalid pattern! Use G, Y and R (or -)".yellow()),
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt(input: &mut dyn BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
