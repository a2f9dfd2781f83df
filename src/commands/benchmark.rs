//! Benchmark command
//!
//! Plays every target word as a secret and summarises how many guesses it took.

use crate::config::SessionConfig;
use crate::core::Word;
use crate::error::SessionError;
use crate::solver::{FeedbackSource, Outcome, Session, SimulatedGame};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    /// Secrets the engine failed on, with the reason
    pub failures: Vec<(String, String)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run a benchmark over `targets`, each played as its own session
///
/// Games run in parallel. With a seed configured, game `i` uses `seed + i` so
/// the whole run is reproducible. If `forced_first` is provided, it is played
/// as the first guess of every game.
#[must_use]
pub fn run_benchmark(
    vocabulary: &[Word],
    targets: &[Word],
    config: SessionConfig,
    forced_first: Option<&Word>,
    show_progress: bool,
) -> BenchmarkResult {
    let progress = if show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<Result<usize, SessionError>> = targets
        .par_iter()
        .enumerate()
        .map(|(index, target)| {
            let config = config.with_seed(config.seed.map(|s| s.wrapping_add(index as u64)));
            let result = play_one(vocabulary, target, config, forced_first);
            progress.inc(1);
            result
        })
        .collect();
    progress.finish_and_clear();
    let duration = start.elapsed();

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for (target, outcome) in targets.iter().zip(outcomes) {
        match outcome {
            Ok(guesses) => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Err(e) => {
                log::warn!("failed to solve {target}: {e}");
                failures.push((target.text().to_string(), e.to_string()));
            }
        }
    }

    let total_words = targets.len();
    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }
    progress
}

/// Play a single game and return the number of guesses it took
fn play_one(
    vocabulary: &[Word],
    target: &Word,
    config: SessionConfig,
    forced_first: Option<&Word>,
) -> Result<usize, SessionError> {
    let mut session = Session::new(vocabulary.to_vec(), config)?;
    let mut game = SimulatedGame::new(target.clone());

    if let Some(first) = forced_first {
        session.force_guess(first.clone())?;
        let Ok(feedback) = game.feedback(first);
        if let Outcome::Solved { rounds, .. } = session.submit_feedback(&feedback)? {
            return Ok(rounds);
        }
    }

    session.play(&mut game)?;
    Ok(session.rounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{VOCABULARY, loader::words_from_slice};

    fn seeded() -> SessionConfig {
        SessionConfig::default().with_seed(Some(99))
    }

    #[test]
    fn benchmark_runs() {
        let vocabulary = words_from_slice(VOCABULARY);
        let result = run_benchmark(&vocabulary, &vocabulary[..20], seeded(), None, false);

        assert_eq!(result.total_words, 20);
        assert_eq!(result.solved, 20);
        assert!(result.failures.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= vocabulary.len());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let vocabulary = words_from_slice(VOCABULARY);
        let result = run_benchmark(&vocabulary, &vocabulary[..15], seeded(), None, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let weighted: usize = result.distribution.iter().map(|(g, c)| g * c).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let vocabulary = words_from_slice(VOCABULARY);
        let first = run_benchmark(&vocabulary, &vocabulary[..10], seeded(), None, false);
        let second = run_benchmark(&vocabulary, &vocabulary[..10], seeded(), None, false);

        assert_eq!(first.total_guesses, second.total_guesses);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let vocabulary = words_from_slice(VOCABULARY);
        let forced = Word::new("salet").unwrap();
        let result = run_benchmark(&vocabulary, &vocabulary[..5], seeded(), Some(&forced), false);

        assert_eq!(result.solved, 5);
        assert!(result.min_guesses >= 2);
    }

    #[test]
    fn benchmark_reports_unknown_secrets_as_failures() {
        let vocabulary = words_from_slice(&["crane", "slate", "trace"]);
        let targets = words_from_slice(&["trace", "mound"]);
        let result = run_benchmark(&vocabulary, &targets, seeded(), None, false);

        assert_eq!(result.solved, 1);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "mound");
    }

    #[test]
    fn benchmark_empty_target_list() {
        let vocabulary = words_from_slice(VOCABULARY);
        let result = run_benchmark(&vocabulary, &[], seeded(), None, false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
