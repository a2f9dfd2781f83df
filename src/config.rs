//! Session configuration

use crate::core::WORD_LENGTH;

/// Settings for a single [`Session`](crate::solver::Session)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Bias guesses toward common unresolved letters. When false, guesses are
    /// a uniformly random candidate.
    pub optimize: bool,
    /// Number of letters in every word of the vocabulary
    pub word_length: usize,
    /// Seed for every random choice. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            optimize: true,
            word_length: WORD_LENGTH,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert!(config.optimize);
        assert_eq!(config.word_length, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_setters() {
        let config = SessionConfig::new()
            .with_optimize(false)
            .with_word_length(6)
            .with_seed(Some(7));
        assert!(!config.optimize);
        assert_eq!(config.word_length, 6);
        assert_eq!(config.seed, Some(7));
    }
}
