//! A single game from first guess to solution
//!
//! The session owns the candidate pool and the letter rank. Each round it
//! hands out one guess, waits for that guess's feedback, sanitizes it,
//! applies it, and either finishes or asks for the next guess.

use super::game::FeedbackSource;
use super::normalizer::normalize;
use super::pool::CandidatePool;
use super::strategy::{Strategy, StrategyType};
use crate::config::SessionConfig;
use crate::core::{FeedbackItem, LetterRank, Round, Word};
use crate::error::{SessionError, VocabularyError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where a session is in its guess/feedback cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to produce the next guess
    AwaitingGuess,
    /// A guess was handed out and its feedback has not arrived yet
    AwaitingFeedback(Word),
    /// Every position of the last guess came back correct
    Solved(Word),
    /// The candidate pool ran dry
    Failed,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved(_) | Self::Failed)
    }
}

/// Result of a round that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { answer: Word, rounds: usize },
    Continue { remaining: usize },
}

/// Word-elimination session
pub struct Session {
    config: SessionConfig,
    strategy: StrategyType,
    pool: CandidatePool,
    rank: LetterRank,
    rng: StdRng,
    state: SessionState,
    history: Vec<Round>,
    vocabulary_size: usize,
}

impl Session {
    /// Start a session over `vocabulary`
    ///
    /// # Errors
    /// Returns `SessionError::Vocabulary` if the vocabulary is empty or any
    /// word does not have the configured length.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::config::SessionConfig;
    /// use wordle_narrow::core::Word;
    /// use wordle_narrow::solver::{Session, SimulatedGame};
    ///
    /// let words: Vec<Word> = ["crane", "slate", "trace", "grate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut session = Session::new(words, SessionConfig::default().with_seed(Some(1))).unwrap();
    ///
    /// let mut game = SimulatedGame::new(Word::new("grate").unwrap());
    /// let answer = session.play(&mut game).unwrap();
    /// assert_eq!(answer.text(), "grate");
    /// ```
    pub fn new(vocabulary: Vec<Word>, config: SessionConfig) -> Result<Self, SessionError> {
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty.into());
        }
        if let Some(word) = vocabulary.iter().find(|w| w.len() != config.word_length) {
            return Err(VocabularyError::LengthMismatch {
                word: word.text().to_string(),
                expected: config.word_length,
            }
            .into());
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let strategy = StrategyType::from_optimize(config.optimize);

        log::info!(
            "session started: {} words, {} strategy",
            vocabulary.len(),
            strategy.name()
        );

        Ok(Self {
            config,
            strategy,
            vocabulary_size: vocabulary.len(),
            pool: CandidatePool::new(vocabulary),
            rank: LetterRank::default(),
            rng,
            state: SessionState::AwaitingGuess,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyType {
        &self.strategy
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.pool.words()
    }

    #[must_use]
    pub const fn letter_rank(&self) -> &LetterRank {
        &self.rank
    }

    /// Every completed round, oldest first
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// Choose the next guess and wait for its feedback
    ///
    /// # Errors
    /// - `GuessPending` if the previous guess has no feedback yet
    /// - `AlreadySolved` once the session is solved
    /// - `Exhausted` if no candidates remain
    pub fn next_guess(&mut self) -> Result<Word, SessionError> {
        self.ready_for_guess()?;

        let Some(guess) = self
            .strategy
            .select_guess(self.pool.words(), &self.rank, &mut self.rng)
            .cloned()
        else {
            self.state = SessionState::Failed;
            return Err(SessionError::Exhausted {
                round: self.rounds(),
            });
        };

        log::info!(
            "round {}: guessing {guess} from {} candidates",
            self.rounds() + 1,
            self.pool.len()
        );
        self.state = SessionState::AwaitingFeedback(guess.clone());
        Ok(guess)
    }

    /// Play a word chosen by the caller instead of the strategy
    ///
    /// The word does not have to be a candidate, but it must have the
    /// configured length.
    ///
    /// # Errors
    /// Same as [`next_guess`](Self::next_guess), plus `GuessLength` for a word
    /// of the wrong length.
    pub fn force_guess(&mut self, guess: Word) -> Result<(), SessionError> {
        self.ready_for_guess()?;
        if guess.len() != self.config.word_length {
            return Err(SessionError::GuessLength {
                word: guess.text().to_string(),
                expected: self.config.word_length,
            });
        }

        log::info!("round {}: playing forced guess {guess}", self.rounds() + 1);
        self.state = SessionState::AwaitingFeedback(guess);
        Ok(())
    }

    /// Apply the feedback for the pending guess
    ///
    /// Items for positions past the end of the guess are dropped. Missing
    /// positions are allowed; the round is only solved when every position is
    /// present and correct.
    ///
    /// # Errors
    /// - `NoGuessPending` if there is no guess waiting for feedback
    /// - `AlreadySolved` once the session is solved
    /// - `Exhausted` if this feedback leaves no candidates. The session then
    ///   stays failed.
    pub fn submit_feedback(&mut self, feedback: &[FeedbackItem]) -> Result<Outcome, SessionError> {
        let guess = match &self.state {
            SessionState::AwaitingFeedback(guess) => guess.clone(),
            SessionState::AwaitingGuess => return Err(SessionError::NoGuessPending),
            SessionState::Solved(_) => return Err(SessionError::AlreadySolved),
            SessionState::Failed => {
                return Err(SessionError::Exhausted {
                    round: self.rounds(),
                });
            }
        };

        let feedback: Vec<FeedbackItem> = feedback
            .iter()
            .filter(|item| check_item(item, &guess))
            .copied()
            .collect();

        let before = self.pool.len();
        for item in normalize(&feedback) {
            self.pool.apply(&item, &mut self.rank);
        }

        let round = Round::new(guess, feedback);
        let solved = round.is_solved().then(|| round.guess.clone());
        self.history.push(round);

        log::info!(
            "round {}: {before} -> {} candidates",
            self.rounds(),
            self.pool.len()
        );

        if let Some(answer) = solved {
            self.state = SessionState::Solved(answer.clone());
            return Ok(Outcome::Solved {
                answer,
                rounds: self.rounds(),
            });
        }

        if self.pool.is_empty() {
            log::warn!("no candidates remain after round {}", self.rounds());
            self.state = SessionState::Failed;
            return Err(SessionError::Exhausted {
                round: self.rounds(),
            });
        }

        self.state = SessionState::AwaitingGuess;
        Ok(Outcome::Continue {
            remaining: self.pool.len(),
        })
    }

    /// Run rounds against `source` until the session is solved or fails,
    /// returning the answer
    ///
    /// Gives up with `RoundLimit` after as many rounds as the vocabulary had
    /// words, which consistent feedback never needs.
    ///
    /// # Errors
    /// Any error from [`next_guess`](Self::next_guess) or
    /// [`submit_feedback`](Self::submit_feedback), `Collaborator` if the
    /// source fails, or `RoundLimit`.
    pub fn play<F>(&mut self, source: &mut F) -> Result<Word, SessionError>
    where
        F: FeedbackSource + ?Sized,
    {
        loop {
            if self.rounds() >= self.vocabulary_size {
                return Err(SessionError::RoundLimit {
                    rounds: self.rounds(),
                });
            }

            let guess = self.next_guess()?;
            let feedback = source
                .feedback(&guess)
                .map_err(|e| SessionError::Collaborator(Box::new(e)))?;

            if let Outcome::Solved { answer, .. } = self.submit_feedback(&feedback)? {
                return Ok(answer);
            }
        }
    }

    fn ready_for_guess(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::AwaitingGuess => Ok(()),
            SessionState::AwaitingFeedback(_) => Err(SessionError::GuessPending),
            SessionState::Solved(_) => Err(SessionError::AlreadySolved),
            SessionState::Failed => Err(SessionError::Exhausted {
                round: self.rounds(),
            }),
        }
    }
}

/// Keep an item unless its position is outside the guess
fn check_item(item: &FeedbackItem, guess: &Word) -> bool {
    match guess.char_at(item.position) {
        None => {
            log::warn!(
                "dropping feedback for position {} of {guess}: out of range",
                item.position
            );
            false
        }
        Some(expected) => {
            if expected != item.character {
                log::warn!(
                    "feedback reports '{}' at position {} but {guess} has '{expected}'",
                    item.character,
                    item.position
                );
            }
            true
        }
    }
}
