//! Word-elimination engine
//!
//! Feedback is sanitized by [`normalize`], applied to the [`CandidatePool`]
//! one item at a time, and a [`Strategy`] picks the next guess from whatever
//! survives. [`Session`] sequences those steps round by round.

mod game;
mod normalizer;
mod pool;
mod session;
pub mod strategy;

pub use game::{FeedbackSource, SimulatedGame};
pub use normalizer::normalize;
pub use pool::{CandidatePool, admits};
pub use session::{Outcome, Session, SessionState};
pub use strategy::{
    LetterCoverageStrategy, RandomStrategy, Strategy, StrategyType, narrow_by_rank,
};
