//! Wordle Narrow
//!
//! A Wordle solver that eliminates vocabulary words from per-letter feedback
//! and picks each next guess to cover the most common unresolved letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::config::SessionConfig;
//! use wordle_narrow::core::{FeedbackItem, LetterState, Word};
//! use wordle_narrow::solver::{Outcome, Session};
//! use wordle_narrow::wordlists::{VOCABULARY, loader::words_from_slice};
//!
//! let mut session = Session::new(words_from_slice(VOCABULARY), SessionConfig::default()).unwrap();
//!
//! // Play the suggested guess somewhere, then report what the game said
//! let guess = session.next_guess().unwrap();
//! let feedback: Vec<FeedbackItem> = guess
//!     .chars()
//!     .enumerate()
//!     .map(|(i, c)| FeedbackItem::new(c, i, LetterState::Correct))
//!     .collect();
//!
//! let outcome = session.submit_feedback(&feedback).unwrap();
//! assert!(matches!(outcome, Outcome::Solved { rounds: 1, .. }));
//! ```

// Session settings
pub mod config;

// Error types
pub mod error;

// Core domain types
pub mod core;

// Word-elimination engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
