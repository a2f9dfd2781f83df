//! Feedback sanitation for repeated letters
//!
//! When a guess repeats a letter that the secret holds only once, the game
//! reports the surplus occurrence as absent even though the letter is in the
//! answer. Taken at face value that verdict would eliminate the secret, so
//! it is discarded before any constraint is applied.

use crate::core::{FeedbackItem, LetterState};
use rustc_hash::FxHashSet;

/// Drop absent verdicts for letters that another position of the same round
/// reported correct or present.
///
/// Every other item passes through unchanged and in its original order. The
/// output is never longer than the input, and normalizing twice gives the
/// same result as normalizing once.
///
/// # Examples
/// ```
/// use wordle_narrow::core::{FeedbackItem, LetterState::*};
/// use wordle_narrow::solver::normalize;
///
/// // "seers" against a secret with a single leading 's'
/// let raw = [
///     FeedbackItem::new('s', 0, Correct),
///     FeedbackItem::new('e', 1, Absent),
///     FeedbackItem::new('e', 2, Absent),
///     FeedbackItem::new('r', 3, Present),
///     FeedbackItem::new('s', 4, Absent),
/// ];
/// let clean = normalize(&raw);
///
/// assert_eq!(clean.len(), 4);
/// assert!(!clean.contains(&FeedbackItem::new('s', 4, Absent)));
/// ```
#[must_use]
pub fn normalize(feedback: &[FeedbackItem]) -> Vec<FeedbackItem> {
    let confirmed: FxHashSet<char> = feedback
        .iter()
        .filter(|item| item.state != LetterState::Absent)
        .map(|item| item.character)
        .collect();

    feedback
        .iter()
        .filter(|item| item.state != LetterState::Absent || !confirmed.contains(&item.character))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterState::*, Word, feedback_for};
    use proptest::prelude::*;

    fn item(character: char, position: usize, state: LetterState) -> FeedbackItem {
        FeedbackItem::new(character, position, state)
    }

    #[test]
    fn unique_letters_pass_through() {
        let raw = vec![
            item('c', 0, Absent),
            item('r', 1, Present),
            item('a', 2, Correct),
            item('n', 3, Absent),
            item('e', 4, Correct),
        ];
        assert_eq!(normalize(&raw), raw);
    }

    #[test]
    fn surplus_absent_dropped_when_sibling_correct() {
        let raw = vec![
            item('s', 0, Correct),
            item('a', 1, Present),
            item('l', 2, Present),
            item('e', 3, Present),
            item('s', 4, Absent),
        ];
        assert_eq!(normalize(&raw), raw[..4].to_vec());
    }

    #[test]
    fn surplus_absent_dropped_when_sibling_present() {
        let raw = vec![
            item('g', 0, Absent),
            item('e', 1, Present),
            item('e', 2, Absent),
            item('s', 3, Absent),
            item('e', 4, Absent),
        ];
        assert_eq!(
            normalize(&raw),
            vec![item('g', 0, Absent), item('e', 1, Present), item('s', 3, Absent)]
        );
    }

    #[test]
    fn repeated_letter_all_absent_is_kept() {
        let raw = vec![
            item('e', 0, Absent),
            item('e', 1, Absent),
            item('r', 2, Correct),
            item('i', 3, Absent),
            item('e', 4, Absent),
        ];
        assert_eq!(normalize(&raw), raw);
    }

    #[test]
    fn empty_feedback() {
        assert!(normalize(&[]).is_empty());
    }

    fn vocabulary_word() -> impl Strategy<Value = Word> {
        prop::sample::select(crate::wordlists::VOCABULARY).prop_map(|w| Word::new(w).unwrap())
    }

    proptest! {
        #[test]
        fn normalizing_is_idempotent(guess in vocabulary_word(), secret in vocabulary_word()) {
            let once = normalize(&feedback_for(&guess, &secret));
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn only_absent_items_are_removed(guess in vocabulary_word(), secret in vocabulary_word()) {
            let raw = feedback_for(&guess, &secret);
            let clean = normalize(&raw);
            prop_assert!(clean.len() <= raw.len());
            for item in raw.iter().filter(|i| i.state != Absent) {
                prop_assert!(clean.contains(item));
            }
        }
    }
}
