//! Per-letter feedback reported by the game
//!
//! A guess produces one [`FeedbackItem`] per position. The game reports each
//! position with one of three tags: `correct`, `present` or `absent`.

use super::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Right letter, right position (green)
    Correct,
    /// Right letter, wrong position (yellow)
    Present,
    /// Letter not in the answer (gray)
    Absent,
}

/// Error returned when feedback from the game cannot be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("unrecognized feedback state \"{0}\"")]
    UnknownState(String),

    #[error("feedback character \"{0}\" is not a single ASCII letter")]
    InvalidCharacter(String),
}

impl LetterState {
    /// The wire tag the game uses for this state
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Parse a compact pattern symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl FromStr for LetterState {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Self::Correct),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(FeedbackError::UnknownState(s.to_string())),
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Feedback for one letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackItem {
    pub character: char,
    pub position: usize,
    pub state: LetterState,
}

impl FeedbackItem {
    /// Create an item; the character is stored lowercase to match [`Word`]
    #[must_use]
    pub const fn new(character: char, position: usize, state: LetterState) -> Self {
        Self {
            character: character.to_ascii_lowercase(),
            position,
            state,
        }
    }

    /// Build an item from the raw strings the game reports
    ///
    /// # Errors
    /// Returns `FeedbackError` if the character is not a single ASCII letter
    /// or the tag is not one of `correct`, `present`, `absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{FeedbackItem, LetterState};
    ///
    /// let item = FeedbackItem::from_tag("R", 1, "present").unwrap();
    /// assert_eq!(item, FeedbackItem::new('r', 1, LetterState::Present));
    ///
    /// assert!(FeedbackItem::from_tag("r", 1, "tbd").is_err());
    /// ```
    pub fn from_tag(character: &str, position: usize, tag: &str) -> Result<Self, FeedbackError> {
        let mut chars = character.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(FeedbackError::InvalidCharacter(character.to_string())),
        };
        let state = tag.parse()?;
        Ok(Self::new(letter, position, state))
    }
}

/// Collect tagged feedback, dropping any entry that cannot be understood
///
/// Each entry is `(character, position, tag)`. A bad entry only loses that
/// position; the rest of the round is kept.
pub fn from_tags<'a, I>(entries: I) -> Vec<FeedbackItem>
where
    I: IntoIterator<Item = (&'a str, usize, &'a str)>,
{
    entries
        .into_iter()
        .filter_map(
            |(character, position, tag)| match FeedbackItem::from_tag(character, position, tag) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("dropping feedback for position {position}: {e}");
                    None
                }
            },
        )
        .collect()
}

/// Pair a compact pattern such as `"-YG-G"` with the guess it describes
///
/// Positions whose symbol is not recognised are dropped.
#[must_use]
pub fn from_pattern(guess: &Word, pattern: &str) -> Vec<FeedbackItem> {
    guess
        .chars()
        .zip(pattern.chars())
        .enumerate()
        .filter_map(
            |(position, (character, symbol))| match LetterState::from_symbol(symbol) {
                Some(state) => Some(FeedbackItem::new(character, position, state)),
                None => {
                    log::warn!("dropping feedback for position {position}: unknown symbol {symbol:?}");
                    None
                }
            },
        )
        .collect()
}

/// Calculate the feedback the game reports when `guess` is played against `secret`
///
/// Standard two-pass scoring: exact matches first, then wrong-position
/// matches from whatever letters of the secret are left. A repeated letter
/// in the guess beyond the secret's count is reported absent.
///
/// # Examples
/// ```
/// use wordle_narrow::core::{Word, LetterState, feedback_for};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("grate").unwrap();
/// let states: Vec<_> = feedback_for(&guess, &secret).iter().map(|i| i.state).collect();
///
/// assert_eq!(states, [
///     LetterState::Absent,
///     LetterState::Correct,
///     LetterState::Correct,
///     LetterState::Absent,
///     LetterState::Correct,
/// ]);
/// ```
#[must_use]
pub fn feedback_for(guess: &Word, secret: &Word) -> Vec<FeedbackItem> {
    let mut states: Vec<LetterState> = vec![LetterState::Absent; guess.len()];
    let mut remaining = [0u8; 26];

    // First pass: greens, and count the secret letters they did not use
    for (i, (g, s)) in guess.chars().zip(secret.chars()).enumerate() {
        if g == s {
            states[i] = LetterState::Correct;
        } else {
            remaining[letter_index(s)] += 1;
        }
    }

    // Second pass: yellows from the unused pool
    for (i, g) in guess.chars().enumerate() {
        if states[i] == LetterState::Correct {
            continue;
        }
        let slot = &mut remaining[letter_index(g)];
        if *slot > 0 {
            states[i] = LetterState::Present;
            *slot -= 1;
        }
    }

    guess
        .chars()
        .zip(states)
        .enumerate()
        .map(|(position, (character, state))| FeedbackItem::new(character, position, state))
        .collect()
}

/// Words only hold lowercase ASCII letters
fn letter_index(letter: char) -> usize {
    (letter as u8 - b'a') as usize
}

/// One guess and the feedback the game reported for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Vec<FeedbackItem>,
}

impl Round {
    #[must_use]
    pub const fn new(guess: Word, feedback: Vec<FeedbackItem>) -> Self {
        Self { guess, feedback }
    }

    /// True only when every position of the guess was reported, and all correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let mut covered = vec![false; self.guess.len()];
        for item in &self.feedback {
            if item.state != LetterState::Correct {
                return false;
            }
            if let Some(slot) = covered.get_mut(item.position) {
                *slot = true;
            }
        }
        !covered.is_empty() && covered.into_iter().all(|seen| seen)
    }
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn states(guess: &str, secret: &str) -> Vec<LetterState> {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        feedback_for(&guess, &secret)
            .iter()
            .map(|item| item.state)
            .collect()
    }

    #[test]
    fn state_parses_wire_tags() {
        assert_eq!("correct".parse::<LetterState>(), Ok(Correct));
        assert_eq!("Present".parse::<LetterState>(), Ok(Present));
        assert_eq!(" absent ".parse::<LetterState>(), Ok(Absent));
        assert_eq!(
            "tbd".parse::<LetterState>(),
            Err(FeedbackError::UnknownState("tbd".to_string()))
        );
    }

    #[test]
    fn state_tag_round_trips() {
        for state in [Correct, Present, Absent] {
            assert_eq!(state.tag().parse::<LetterState>(), Ok(state));
        }
    }

    #[test]
    fn from_tag_rejects_bad_characters() {
        assert!(matches!(
            FeedbackItem::from_tag("", 0, "absent"),
            Err(FeedbackError::InvalidCharacter(_))
        ));
        assert!(matches!(
            FeedbackItem::from_tag("ab", 0, "absent"),
            Err(FeedbackError::InvalidCharacter(_))
        ));
        assert!(FeedbackItem::from_tag("7", 0, "absent").is_err());
    }

    #[test]
    fn from_tags_drops_only_bad_entries() {
        let items = from_tags([
            ("c", 0, "absent"),
            ("r", 1, "evaluating"),
            ("a", 2, "correct"),
        ]);
        assert_eq!(
            items,
            vec![
                FeedbackItem::new('c', 0, Absent),
                FeedbackItem::new('a', 2, Correct),
            ]
        );
    }

    #[test]
    fn from_pattern_pairs_symbols_with_guess() {
        let guess = Word::new("crane").unwrap();
        let items = from_pattern(&guess, "-yG?🟩");
        assert_eq!(
            items,
            vec![
                FeedbackItem::new('c', 0, Absent),
                FeedbackItem::new('r', 1, Present),
                FeedbackItem::new('a', 2, Correct),
                FeedbackItem::new('e', 4, Correct),
            ]
        );
    }

    #[test]
    fn feedback_all_correct() {
        assert_eq!(states("crane", "crane"), vec![Correct; 5]);
    }

    #[test]
    fn feedback_mixed() {
        assert_eq!(
            states("crane", "slate"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
        assert_eq!(
            states("crane", "trace"),
            vec![Present, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn feedback_surplus_duplicate_reported_absent() {
        // Only one 's' in the secret: the second 's' of the guess comes back absent
        assert_eq!(
            states("sales", "slate"),
            vec![Correct, Present, Present, Present, Absent]
        );
        assert_eq!(
            states("geese", "creep"),
            vec![Absent, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn round_solved_requires_every_position() {
        let guess = Word::new("trace").unwrap();
        let full: Vec<_> = (0..5)
            .map(|i| FeedbackItem::new(guess.char_at(i).unwrap(), i, Correct))
            .collect();

        assert!(Round::new(guess.clone(), full.clone()).is_solved());
        assert!(!Round::new(guess.clone(), full[..4].to_vec()).is_solved());
        assert!(!Round::new(guess.clone(), Vec::new()).is_solved());

        // Five items, but all for the first position
        let repeated = vec![FeedbackItem::new('t', 0, Correct); 5];
        assert!(!Round::new(guess, repeated).is_solved());
    }

    #[test]
    fn new_item_lowercases_character() {
        assert_eq!(FeedbackItem::new('R', 1, Correct).character, 'r');
        assert_eq!(
            FeedbackItem::new('R', 1, Correct),
            FeedbackItem::new('r', 1, Correct)
        );
    }
}
