//! Candidate pool and constraint application
//!
//! The pool holds every vocabulary word still consistent with the feedback
//! seen so far. It only ever shrinks.

use crate::core::{FeedbackItem, LetterRank, LetterState, Word};

/// Check whether a word survives a single (normalized) feedback item
///
/// - Correct: the word has the letter at that position
/// - Present: the word has the letter, but not at that position
/// - Absent: the word does not have the letter at all
#[must_use]
pub fn admits(item: &FeedbackItem, word: &Word) -> bool {
    let at_position = word.char_at(item.position) == Some(item.character);
    match item.state {
        LetterState::Correct => at_position,
        LetterState::Present => !at_position && word.has_letter(item.character),
        LetterState::Absent => !word.has_letter(item.character),
    }
}

/// Words still possibly equal to the secret answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Remove every word that contradicts `item` and retire its letter from `rank`
    ///
    /// Applying the same item again removes nothing further.
    pub fn apply(&mut self, item: &FeedbackItem, rank: &mut LetterRank) {
        let before = self.words.len();
        self.words.retain(|word| admits(item, word));
        rank.remove(item.character);

        log::debug!(
            "{} '{}' at {}: {} -> {} candidates",
            item.state,
            item.character,
            item.position,
            before,
            self.words.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::*;

    fn pool(words: &[&str]) -> CandidatePool {
        CandidatePool::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    fn texts(pool: &CandidatePool) -> Vec<&str> {
        pool.words().iter().map(Word::text).collect()
    }

    #[test]
    fn correct_keeps_words_with_letter_at_position() {
        let mut pool = pool(&["crane", "slate", "trace", "grate"]);
        let mut rank = LetterRank::default();

        pool.apply(&FeedbackItem::new('a', 2, Correct), &mut rank);
        assert_eq!(texts(&pool), ["crane", "slate", "trace", "grate"]);

        pool.apply(&FeedbackItem::new('r', 1, Correct), &mut rank);
        assert_eq!(texts(&pool), ["crane", "trace", "grate"]);
        assert!(!rank.contains('r'));
    }

    #[test]
    fn absent_removes_words_containing_letter() {
        let mut pool = pool(&["crane", "slate", "trace", "grate"]);
        let mut rank = LetterRank::default();

        pool.apply(&FeedbackItem::new('c', 0, Absent), &mut rank);
        assert_eq!(texts(&pool), ["slate", "grate"]);
        assert!(!rank.contains('c'));
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let mut pool = pool(&["crane", "slate", "trace", "grate", "mound"]);
        let mut rank = LetterRank::default();

        pool.apply(&FeedbackItem::new('r', 1, Present), &mut rank);
        assert!(pool.is_empty());

        let mut pool = self::pool(&["crane", "slate", "trace", "grate", "mound"]);
        pool.apply(&FeedbackItem::new('t', 0, Present), &mut rank);
        assert_eq!(texts(&pool), ["slate", "grate"]);
        assert!(!rank.contains('t'));
    }

    #[test]
    fn reapplying_removes_nothing() {
        let mut pool = pool(&["crane", "slate", "trace", "grate", "irate"]);
        let mut rank = LetterRank::default();
        let item = FeedbackItem::new('e', 4, Correct);

        pool.apply(&item, &mut rank);
        let once = pool.clone();
        pool.apply(&item, &mut rank);
        assert_eq!(pool, once);
    }

    #[test]
    fn position_past_end_never_matches() {
        let word = Word::new("crane").unwrap();
        assert!(!admits(&FeedbackItem::new('e', 9, Correct), &word));
        assert!(admits(&FeedbackItem::new('e', 9, Present), &word));
    }
}
