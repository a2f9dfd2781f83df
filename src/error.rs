//! Errors produced while loading a vocabulary or running a session

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// The vocabulary could not be turned into a usable candidate pool.
///
/// Any of these prevents a session from starting.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the word list is empty")]
    Empty,

    #[error("entry {index} of the word list is not a valid word")]
    InvalidWord {
        index: usize,
        #[source]
        source: WordError,
    },

    #[error("\"{word}\" does not match the configured word length of {expected}")]
    LengthMismatch { word: String, expected: usize },
}

/// Failures surfaced by a [`Session`](crate::solver::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot start a session")]
    Vocabulary(#[from] VocabularyError),

    /// No candidate survives the feedback seen so far. Either the feedback was
    /// inconsistent or the secret is missing from the vocabulary.
    #[error("no candidate words remain after round {round}")]
    Exhausted { round: usize },

    #[error("the session is already solved")]
    AlreadySolved,

    #[error("a guess is already waiting for feedback")]
    GuessPending,

    #[error("guess \"{word}\" does not have the configured length of {expected}")]
    GuessLength { word: String, expected: usize },

    #[error("no guess has been made yet")]
    NoGuessPending,

    #[error("the feedback source failed")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("gave up after {rounds} rounds without a solution")]
    RoundLimit { rounds: usize },
}
