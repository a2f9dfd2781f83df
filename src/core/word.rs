//! Wordle word representation
//!
//! A Word stores a lowercase ASCII word along with a letter bitmask for fast membership tests.

use std::fmt;
use thiserror::Error;

/// Board width used when no other length is configured
pub const WORD_LENGTH: usize = 5;

/// A fixed-length Wordle word with letter membership tracking
///
/// Words are immutable once created. Letters are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("word \"{0}\" must contain only ASCII letters")]
    InvalidCharacters(String),
}

/// Bit for a lowercase ASCII letter, zero for anything else
const fn letter_bit(letter: char) -> u32 {
    if letter.is_ascii_lowercase() {
        1 << (letter as u32 - 'a' as u32)
    } else {
        0
    }
}

impl Word {
    /// Create a new Word of the default length
    ///
    /// # Errors
    /// Returns `WordError` if the length is not [`WORD_LENGTH`] or the text
    /// contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, WORD_LENGTH)
    }

    /// Create a new Word that must be exactly `length` letters long
    ///
    /// # Errors
    /// Returns `WordError` if the length does not match or the text contains
    /// anything other than ASCII letters.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters = text.chars().fold(0, |mask, c| mask | letter_bit(c));

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, or `None` past the end of the word
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.text.as_bytes().get(position).map(|&b| char::from(b))
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        let bit = letter_bit(letter);
        bit != 0 && self.letters & bit != 0
    }

    /// Iterate over the letters in positional order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word, Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cranë").is_err());
    }

    #[test]
    fn word_custom_length() {
        let word = Word::with_length("planet", 6).unwrap();
        assert_eq!(word.len(), 6);
        assert!(Word::with_length("plane", 6).is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), Some('c'));
        assert_eq!(word.char_at(4), Some('e'));
        assert_eq!(word.char_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("speed").unwrap();
        assert!(word.has_letter('s'));
        assert!(word.has_letter('e'));
        assert!(!word.has_letter('z'));
        assert!(!word.has_letter('E'));
        assert!(!word.has_letter('1'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
