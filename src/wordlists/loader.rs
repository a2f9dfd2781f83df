//! Word list loading utilities
//!
//! Provides functions to load a vocabulary from files or use embedded constants.

use crate::core::Word;
use crate::error::VocabularyError;
use std::fs;
use std::path::Path;

/// Load a vocabulary from a whitespace-separated word file
///
/// Every word must be exactly `word_length` letters; a bad entry or an empty
/// file is an error rather than something to skip.
///
/// # Errors
///
/// Returns `VocabularyError` if the file cannot be read, is empty, or holds
/// an invalid word.
///
/// # Examples
/// ```no_run
/// use wordle_narrow::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Vec<Word>, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_vocabulary(&content, word_length)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a whitespace-separated vocabulary
///
/// # Errors
///
/// Returns `VocabularyError::Empty` if there are no words, or
/// `VocabularyError::InvalidWord` naming the first bad entry.
pub fn parse_vocabulary(content: &str, word_length: usize) -> Result<Vec<Word>, VocabularyError> {
    let words = content
        .split_whitespace()
        .enumerate()
        .map(|(index, text)| {
            Word::with_length(text, word_length)
                .map_err(|source| VocabularyError::InvalidWord { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(VocabularyError::Empty);
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::words_from_slice;
/// use wordle_narrow::wordlists::VOCABULARY;
///
/// let words = words_from_slice(VOCABULARY);
/// assert_eq!(words.len(), VOCABULARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
