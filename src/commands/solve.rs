//! Word solving command
//!
//! Plays a simulated game against a known secret and returns the solution path.

use crate::config::SessionConfig;
use crate::core::{FeedbackItem, Word};
use crate::solver::{FeedbackSource, Outcome, Session, SimulatedGame};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Play this word first instead of asking the strategy
    pub first_guess: Option<String>,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            first_guess: None,
            session: SessionConfig::new(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: String,
    pub strategy: &'static str,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Vec<FeedbackItem>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word
///
/// # Errors
///
/// Returns an error if:
/// - The secret or forced first guess is not a valid word
/// - The secret is not in the vocabulary
/// - The session cannot start or runs out of candidates
pub fn solve_word(vocabulary: &[Word], config: SolveConfig) -> Result<SolveResult> {
    let length = config.session.word_length;
    let secret =
        Word::with_length(config.secret.as_str(), length).context("invalid secret word")?;
    if !vocabulary.contains(&secret) {
        bail!("\"{secret}\" is not in the vocabulary");
    }

    let mut forced = config
        .first_guess
        .as_deref()
        .map(|text| Word::with_length(text, length))
        .transpose()
        .context("invalid first guess")?;

    let mut session = Session::new(vocabulary.to_vec(), config.session)?;
    let strategy = session.strategy().name();
    let mut game = SimulatedGame::new(secret);
    let mut guesses: Vec<GuessStep> = Vec::new();

    loop {
        let candidates_before = session.candidate_count();

        let guess = match forced.take() {
            Some(word) => {
                session.force_guess(word.clone())?;
                word
            }
            None => session.next_guess()?,
        };

        let Ok(feedback) = game.feedback(&guess);
        let outcome = session
            .submit_feedback(&feedback)
            .with_context(|| format!("applying feedback for {guess}"))?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: session.candidate_count(),
        });

        if let Outcome::Solved { .. } = outcome {
            return Ok(SolveResult {
                secret: config.secret,
                strategy,
                guesses,
            });
        }
    }
}
