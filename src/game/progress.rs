//! Level progression state machine
//!
//! Owns the `GameState` and exposes the only operations that mutate it:
//! setting up a level, recording a validated guess, judging the outcome,
//! advancing, finishing and resetting. The machine never blocks; its single
//! external call is the word request during level setup.

use crate::core::{Feedback, FeedbackMark, Word};
use crate::game::state::{GameState, HistoryEntry};
use crate::game::traits::{WordSource, WordSourceError};
use crate::game::GameConfig;
use log::debug;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No target word assigned for the current level yet
    AwaitingWord,
    /// Target assigned, accepting guesses
    InProgress,
    /// Terminal: the final level was cleared
    Won,
    /// Terminal: lives ran out or level setup failed
    Lost,
}

/// Judgement of the session right after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess missed and lives remain
    Continue,
    /// The guess matched a non-final target; advance and set up the next level
    LevelComplete,
    /// The guess matched the final level's target
    Won,
    /// The guess missed and no lives remain
    Lost,
}

/// Error type for rejected guess recordings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    GameOver,
    NoTargetWord,
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::NoTargetWord => write!(f, "No target word has been assigned"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// The level/progress state machine
///
/// Exclusive owner of the session's `GameState`.
pub struct ProgressMachine {
    config: GameConfig,
    state: GameState,
}

impl ProgressMachine {
    /// Machine for a fresh session
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self { config, state }
    }

    /// Machine resuming a previously saved session
    ///
    /// Restores exactly what was saved; nothing is re-derived.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        Self { config, state }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the session state
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase, derived from the state
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_over {
            if self.state.is_won {
                Phase::Won
            } else {
                Phase::Lost
            }
        } else if self.state.target_word.is_none() {
            Phase::AwaitingWord
        } else {
            Phase::InProgress
        }
    }

    /// Set up the current level: clear per-level letter sets and pick a target
    ///
    /// The request is constrained to the required starting letter on every
    /// level after the first. On the first level the first letter of the
    /// chosen word becomes that constraint, once, for the rest of the session.
    ///
    /// # Errors
    /// Returns `WordSourceError` when the source fails or has no word
    /// matching the level length and letter constraint. The machine is then
    /// terminal (not won); the caller must not persist that transition so a
    /// restart can retry from the last good snapshot.
    pub fn begin_level<S: WordSource>(&mut self, source: &S) -> Result<(), WordSourceError> {
        debug_assert!(!self.state.is_over, "begin_level on a finished game");

        let level = self.state.current_level;
        self.state.target_word = None;
        self.state.duplicate_letters.clear();
        self.state.absent_letters.clear();

        let constraint = if level > self.config.start_level {
            self.state.required_starting_letter
        } else {
            None
        };

        let candidates = match source.candidate_words(level, constraint) {
            Ok(candidates) => candidates,
            Err(err) => {
                self.finish(false);
                return Err(err);
            }
        };

        // The source is not trusted to filter; drop anything off-length or
        // off-constraint before picking.
        let eligible: Vec<&Word> = candidates
            .iter()
            .filter(|word| word.len() == level)
            .filter(|word| constraint.is_none_or(|letter| word.first_letter() == letter))
            .collect();

        let Some(&target) = eligible.choose(&mut rand::rng()) else {
            self.finish(false);
            return Err(WordSourceError::NoCandidates {
                length: level,
                starting_letter: constraint,
            });
        };
        let target = target.clone();

        if level == self.config.start_level && self.state.required_starting_letter.is_none() {
            self.state.required_starting_letter = Some(target.first_letter());
        }

        self.state.duplicate_letters = target.duplicate_letters();
        debug!("target word for level {level}: {target}");
        self.state.target_word = Some(target);
        Ok(())
    }

    /// Record one validated guess: score it, spend a life, append to history
    ///
    /// Letters join the absent set only when they miss the whole target; an
    /// absent mark on one position of a repeated letter says nothing about
    /// the rest of the word.
    ///
    /// # Errors
    /// Returns `GuessError` when the game is over, no target is assigned, or
    /// the guess length does not match the level. Nothing is mutated in any
    /// error case.
    pub fn record_guess(&mut self, guess: &Word) -> Result<HistoryEntry, GuessError> {
        if self.state.is_over {
            return Err(GuessError::GameOver);
        }
        let Some(target) = &self.state.target_word else {
            return Err(GuessError::NoTargetWord);
        };
        if guess.len() != target.len() {
            return Err(GuessError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let feedback = Feedback::score(guess, target);
        let ruled_out: Vec<u8> = guess
            .bytes()
            .iter()
            .zip(feedback.iter())
            .filter(|&(letter, mark)| mark == FeedbackMark::Absent && !target.has_letter(*letter))
            .map(|(&letter, _)| letter)
            .collect();

        self.state.absent_letters.extend(ruled_out);
        self.state.lives_remaining = self.state.lives_remaining.saturating_sub(1);

        let entry = HistoryEntry {
            guess: guess.clone(),
            feedback,
            word_length: self.state.current_level,
        };
        self.state.guess_history.push(entry.clone());
        Ok(entry)
    }

    /// Judge the session after the most recent guess
    ///
    /// An exact match wins over life exhaustion: clearing a level with the
    /// last life still advances (or wins) rather than losing.
    #[must_use]
    pub fn evaluate_outcome(&self) -> Outcome {
        let matched = match (self.state.guess_history.last(), &self.state.target_word) {
            (Some(entry), Some(target)) => entry.guess == *target,
            _ => false,
        };

        if matched {
            if self.state.current_level == self.config.end_level {
                Outcome::Won
            } else {
                Outcome::LevelComplete
            }
        } else if self.state.lives_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::Continue
        }
    }

    /// Move to the next level after a `LevelComplete` outcome
    ///
    /// Lives carry over untouched; the target is dropped until `begin_level`
    /// picks the next one.
    pub fn advance_level(&mut self) {
        debug_assert!(!self.state.is_over, "advance_level on a finished game");
        debug_assert!(
            self.state.current_level < self.config.end_level,
            "advance_level past the final level"
        );
        self.state.current_level += 1;
        self.state.target_word = None;
    }

    /// Mark the session terminal
    pub fn finish(&mut self, won: bool) {
        self.state.is_over = true;
        self.state.is_won = won;
    }

    /// Discard the session and start fresh (the explicit new-game action)
    ///
    /// This is the only operation that clears the required starting letter.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
    }
}
