//! Letter frequency ranking
//!
//! Guesses are biased toward words covering the most common letters that have
//! not yet been resolved by feedback.

/// Approximate English letter usage, most common first
pub const LETTER_FREQUENCY: [char; 26] = [
    'e', 'a', 'r', 'i', 'o', 't', 'n', 's', 'l', 'c', 'u', 'd', 'p', 'm', 'h', 'g', 'b', 'f', 'y',
    'w', 'k', 'v', 'x', 'z', 'j', 'q',
];

/// Ordered, shrinking list of letters still worth probing
///
/// Starts as a copy of a seed ordering. Letters are removed once feedback has
/// said anything about them and are never added back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRank {
    letters: Vec<char>,
}

impl LetterRank {
    /// Create a rank from a custom seed ordering
    ///
    /// Letters are lowercased; repeats after the first occurrence are ignored.
    #[must_use]
    pub fn new(seed: &[char]) -> Self {
        let mut letters: Vec<char> = Vec::with_capacity(seed.len());
        for letter in seed.iter().map(char::to_ascii_lowercase) {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        Self { letters }
    }

    /// Letters from best to worst
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Drop a letter, keeping the order of the rest. Returns whether it was present.
    pub(crate) fn remove(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&l| l == letter) {
            Some(index) => {
                self.letters.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for LetterRank {
    fn default() -> Self {
        Self::new(&LETTER_FREQUENCY)
    }
}
