//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{LetterRank, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for choosing the next guess from the surviving candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rank: &LetterRank,
        rng: &mut R,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter coverage heuristic (default)
    Optimized(LetterCoverageStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rank: &LetterRank,
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Optimized(s) => s.select_guess(candidates, rank, rng),
            Self::Random(s) => s.select_guess(candidates, rank, rng),
        }
    }
}

impl StrategyType {
    /// Map the `optimize` configuration flag to a strategy
    #[must_use]
    pub const fn from_optimize(optimize: bool) -> Self {
        if optimize {
            Self::Optimized(LetterCoverageStrategy)
        } else {
            Self::Random(RandomStrategy)
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Optimized(_) => "optimized",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::from_optimize(true)
    }
}

/// Narrow `candidates` by walking the rank from the most common letter down
///
/// Each letter restricts the working set to words containing it. The walk
/// stops at the first letter that would leave nothing, keeping the last
/// non-empty set, or when the rank runs out.
#[must_use]
pub fn narrow_by_rank<'a>(candidates: &'a [Word], rank: &LetterRank) -> Vec<&'a Word> {
    let mut working: Vec<&Word> = candidates.iter().collect();

    for &letter in rank.letters() {
        let narrowed: Vec<&Word> = working
            .iter()
            .copied()
            .filter(|word| word.has_letter(letter))
            .collect();

        if narrowed.is_empty() {
            break;
        }
        working = narrowed;
    }

    working
}

/// Greedy letter coverage strategy
///
/// Prefers words that contain the most common letters not yet resolved by
/// feedback, then picks at random among the survivors. A heuristic, not a
/// search for maximum information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCoverageStrategy;

impl Strategy for LetterCoverageStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rank: &LetterRank,
        rng: &mut R,
    ) -> Option<&'a Word> {
        let working = narrow_by_rank(candidates, rank);
        log::trace!(
            "letter coverage kept {} of {} candidates",
            working.len(),
            candidates.len()
        );
        working.choose(rng).copied()
    }
}

/// Random strategy
///
/// Picks uniformly from the remaining candidates, ignoring the rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        _rank: &LetterRank,
        rng: &mut R,
    ) -> Option<&'a Word> {
        candidates.choose(rng)
    }
}
