//! Game state: the single source of truth for one session
//!
//! `GameState` is owned by the progress machine and mutated only through its
//! operations. Everything outside the `game` module gets read-only access.

use crate::core::{Feedback, Word};
use crate::game::GameConfig;
use std::collections::BTreeSet;

/// A single validated guess and its feedback, as recorded in the transcript
///
/// `word_length` is the level that was active when the guess was made;
/// entries for completed levels keep that length forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Feedback,
    pub word_length: usize,
}

/// All state for one game session
///
/// Fields are only writable inside the `game` module; external components
/// read through the accessors and mutate through `ProgressMachine` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Word length of the active level
    pub(super) current_level: usize,
    /// Validated guesses left before the game is lost
    pub(super) lives_remaining: u32,
    /// `None` until the level's word has been chosen
    pub(super) target_word: Option<Word>,
    /// First letter of the very first target word; fixed for the session
    pub(super) required_starting_letter: Option<u8>,
    /// Letters appearing at least twice in the current target
    pub(super) duplicate_letters: BTreeSet<u8>,
    /// Letters ruled out entirely for the current target
    pub(super) absent_letters: BTreeSet<u8>,
    /// Every validated guess of the session, in order, across all levels
    pub(super) guess_history: Vec<HistoryEntry>,
    pub(super) is_over: bool,
    pub(super) is_won: bool,
}

impl GameState {
    /// Fresh state for the first level of a session
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            current_level: config.start_level,
            lives_remaining: config.max_lives,
            target_word: None,
            required_starting_letter: None,
            duplicate_letters: BTreeSet::new(),
            absent_letters: BTreeSet::new(),
            guess_history: Vec::new(),
            is_over: false,
            is_won: false,
        }
    }

    /// Rebuild state from persisted values
    ///
    /// The caller (snapshot restore) is responsible for having validated the
    /// values against the active configuration.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        current_level: usize,
        lives_remaining: u32,
        target_word: Option<Word>,
        required_starting_letter: Option<u8>,
        duplicate_letters: BTreeSet<u8>,
        absent_letters: BTreeSet<u8>,
        guess_history: Vec<HistoryEntry>,
        is_over: bool,
        is_won: bool,
    ) -> Self {
        Self {
            current_level,
            lives_remaining,
            target_word,
            required_starting_letter,
            duplicate_letters,
            absent_letters,
            guess_history,
            is_over,
            is_won,
        }
    }

    /// Word length of the active level
    #[inline]
    #[must_use]
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Validated guesses left before the game is lost
    #[inline]
    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    /// The hidden word for the active level, once assigned
    #[inline]
    #[must_use]
    pub fn target_word(&self) -> Option<&Word> {
        self.target_word.as_ref()
    }

    /// First letter every target after the first level must share
    #[inline]
    #[must_use]
    pub fn required_starting_letter(&self) -> Option<u8> {
        self.required_starting_letter
    }

    /// Letters appearing at least twice in the current target
    #[inline]
    #[must_use]
    pub fn duplicate_letters(&self) -> &BTreeSet<u8> {
        &self.duplicate_letters
    }

    /// Letters ruled out entirely for the current target
    #[inline]
    #[must_use]
    pub fn absent_letters(&self) -> &BTreeSet<u8> {
        &self.absent_letters
    }

    /// The full transcript, oldest guess first
    #[inline]
    #[must_use]
    pub fn guess_history(&self) -> &[HistoryEntry] {
        &self.guess_history
    }

    /// The most recent validated guess, if any
    #[must_use]
    pub fn last_guess(&self) -> Option<&HistoryEntry> {
        self.guess_history.last()
    }

    /// True once the session has ended, won or lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// True when the session ended by clearing the final level
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_matches_config() {
        let config = GameConfig::default();
        let state = GameState::new(&config);

        assert_eq!(state.current_level(), config.start_level);
        assert_eq!(state.lives_remaining(), config.max_lives);
        assert!(state.target_word().is_none());
        assert!(state.required_starting_letter().is_none());
        assert!(state.duplicate_letters().is_empty());
        assert!(state.absent_letters().is_empty());
        assert!(state.guess_history().is_empty());
        assert!(!state.is_over());
        assert!(!state.is_won());
    }

    #[test]
    fn last_guess_tracks_history() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        assert!(state.last_guess().is_none());

        let guess = Word::new("apple").unwrap();
        let feedback = Feedback::score(&guess, &guess);
        state.guess_history.push(HistoryEntry {
            guess: guess.clone(),
            feedback,
            word_length: 5,
        });

        assert_eq!(state.last_guess().unwrap().guess, guess);
    }
}
