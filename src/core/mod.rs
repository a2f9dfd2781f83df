//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the letter ranking. Nothing here filters
//! candidates or chooses guesses; that lives in [`crate::solver`].

mod feedback;
mod letter_rank;
mod word;

pub use feedback::{
    FeedbackError, FeedbackItem, LetterState, Round, feedback_for, from_pattern, from_tags,
};
pub use letter_rank::{LETTER_FREQUENCY, LetterRank};
pub use word::{WORD_LENGTH, Word, WordError};
