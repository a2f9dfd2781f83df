//! The boundary between a session and whatever actually plays the game

use crate::core::{FeedbackItem, Word, feedback_for};
use std::convert::Infallible;

/// Executes a guess and reports the game's per-letter feedback
///
/// This is a blocking call: the session waits for the answer before it does
/// anything else. Positions the source could not read may simply be left out
/// of the returned feedback.
pub trait FeedbackSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Play `guess` and return the feedback for it
    ///
    /// # Errors
    /// Returns an error if the guess could not be played at all.
    fn feedback(&mut self, guess: &Word) -> Result<Vec<FeedbackItem>, Self::Error>;
}

/// A game with a known secret, scored locally
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    secret: Word,
    plays: usize,
}

impl SimulatedGame {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret, plays: 0 }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of guesses played so far
    #[must_use]
    pub const fn plays(&self) -> usize {
        self.plays
    }
}

impl FeedbackSource for SimulatedGame {
    type Error = Infallible;

    fn feedback(&mut self, guess: &Word) -> Result<Vec<FeedbackItem>, Self::Error> {
        self.plays += 1;
        Ok(feedback_for(guess, &self.secret))
    }
}
