//! Versioned session snapshots
//!
//! A snapshot is the JSON image of one `GameState`. Loading is self-healing:
//! anything unreadable or inconsistent with the active configuration is
//! logged, deleted and treated as no saved session at all. Saving never
//! raises; a session that cannot be persisted still plays on.

use crate::core::{Feedback, FeedbackMark, Word, WordError};
use crate::game::{GameConfig, GameState, HistoryEntry};
use crate::persist::store::KvStore;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

const SESSION_KEY: &str = "session_v1";
const SNAPSHOT_VERSION: u32 = 1;

/// Why a parsed snapshot was rejected on restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    Version(u32),
    LevelOutOfRange(usize),
    LivesOutOfRange(u32),
    TargetLength { expected: usize, actual: usize },
    FeedbackLength { word: String },
    Letter(char),
    Word(WordError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Version(version) => write!(f, "unsupported snapshot version {version}"),
            Self::LevelOutOfRange(level) => {
                write!(f, "level {level} is outside the configured range")
            }
            Self::LivesOutOfRange(lives) => {
                write!(f, "lives {lives} exceed the configured maximum")
            }
            Self::TargetLength { expected, actual } => {
                write!(f, "target word is {actual} letters, level needs {expected}")
            }
            Self::FeedbackLength { word } => {
                write!(f, "feedback for '{word}' does not match its length")
            }
            Self::Letter(c) => write!(f, "'{c}' is not a lowercase letter"),
            Self::Word(err) => write!(f, "invalid word: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<WordError> for SnapshotError {
    fn from(err: WordError) -> Self {
        Self::Word(err)
    }
}

/// One guess as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub word: String,
    pub feedback: Vec<FeedbackMark>,
    #[serde(default)]
    pub word_length: usize,
}

impl SnapshotEntry {
    fn capture(entry: &HistoryEntry) -> Self {
        Self {
            word: entry.guess.text().to_string(),
            feedback: entry.feedback.marks().to_vec(),
            word_length: entry.word_length,
        }
    }

    fn restore(self) -> Result<HistoryEntry, SnapshotError> {
        let guess = Word::new(self.word)?;
        if self.feedback.len() != guess.len() {
            return Err(SnapshotError::FeedbackLength {
                word: guess.text().to_string(),
            });
        }
        // Older snapshots carried no per-entry length; fall back to the word
        let word_length = if self.word_length == 0 {
            guess.len()
        } else {
            self.word_length
        };
        Ok(HistoryEntry {
            guess,
            feedback: Feedback::from(self.feedback),
            word_length,
        })
    }
}

/// JSON image of a whole session
///
/// `version`, `current_level` and `lives_remaining` are required; every
/// other field falls back to its default so older or hand-trimmed snapshots
/// still restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub current_level: usize,
    pub lives_remaining: u32,
    #[serde(default)]
    pub target_word: Option<String>,
    #[serde(default)]
    pub required_starting_letter: Option<char>,
    #[serde(default)]
    pub duplicate_letters: Vec<char>,
    #[serde(default)]
    pub absent_letters: Vec<char>,
    #[serde(default)]
    pub guess_history: Vec<SnapshotEntry>,
    #[serde(default)]
    pub is_over: bool,
    #[serde(default)]
    pub is_won: bool,
}

impl Snapshot {
    /// Image of the given state at the current snapshot version
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            current_level: state.current_level(),
            lives_remaining: state.lives_remaining(),
            target_word: state.target_word().map(|w| w.text().to_string()),
            required_starting_letter: state.required_starting_letter().map(char::from),
            duplicate_letters: state.duplicate_letters().iter().map(|&b| char::from(b)).collect(),
            absent_letters: state.absent_letters().iter().map(|&b| char::from(b)).collect(),
            guess_history: state.guess_history().iter().map(SnapshotEntry::capture).collect(),
            is_over: state.is_over(),
            is_won: state.is_won(),
        }
    }

    /// Rebuild the state this snapshot describes
    ///
    /// # Errors
    /// Returns `SnapshotError` when the snapshot is from another version or
    /// does not fit the active configuration.
    pub fn restore(self, config: &GameConfig) -> Result<GameState, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version(self.version));
        }
        if self.current_level < config.start_level || self.current_level > config.end_level {
            return Err(SnapshotError::LevelOutOfRange(self.current_level));
        }
        if self.lives_remaining > config.max_lives {
            return Err(SnapshotError::LivesOutOfRange(self.lives_remaining));
        }

        let target_word = match self.target_word {
            Some(text) => {
                let word = Word::new(text)?;
                if word.len() != self.current_level {
                    return Err(SnapshotError::TargetLength {
                        expected: self.current_level,
                        actual: word.len(),
                    });
                }
                Some(word)
            }
            None => None,
        };

        let required_starting_letter = self
            .required_starting_letter
            .map(letter_from_char)
            .transpose()?;
        let duplicate_letters = letters_from_chars(self.duplicate_letters)?;
        let absent_letters = letters_from_chars(self.absent_letters)?;
        let guess_history = self
            .guess_history
            .into_iter()
            .map(SnapshotEntry::restore)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(entry) = guess_history
            .iter()
            .find(|e| e.word_length < config.start_level || e.word_length > config.end_level)
        {
            return Err(SnapshotError::LevelOutOfRange(entry.word_length));
        }

        Ok(GameState::from_parts(
            self.current_level,
            self.lives_remaining,
            target_word,
            required_starting_letter,
            duplicate_letters,
            absent_letters,
            guess_history,
            self.is_over,
            self.is_won,
        ))
    }
}

fn letter_from_char(c: char) -> Result<u8, SnapshotError> {
    if c.is_ascii_lowercase() {
        Ok(c as u8)
    } else {
        Err(SnapshotError::Letter(c))
    }
}

fn letters_from_chars(chars: Vec<char>) -> Result<BTreeSet<u8>, SnapshotError> {
    chars.into_iter().map(letter_from_char).collect()
}

/// Save, load and clear sessions through a key-value backend
pub struct SessionStore<K> {
    store: K,
}

impl<K: KvStore> SessionStore<K> {
    #[must_use]
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Persist the session; failures are logged and play continues
    pub fn save(&self, state: &GameState) {
        let snapshot = Snapshot::capture(state);
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not serialize session: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(SESSION_KEY, &json) {
            warn!("could not save session: {err}");
        }
    }

    /// Load the saved session, if any
    ///
    /// An unreadable or incompatible snapshot is deleted so the next load
    /// starts clean.
    pub fn load(&self, config: &GameConfig) -> Option<GameState> {
        let json = match self.store.get(SESSION_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(err) => {
                warn!("could not read saved session: {err}");
                return None;
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("discarding unreadable session snapshot: {err}");
                self.clear();
                return None;
            }
        };

        match snapshot.restore(config) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!("discarding incompatible session snapshot: {err}");
                self.clear();
                return None;
            }
        }
    }

    /// Remove any saved session
    pub fn clear(&self) {
        if let Err(err) = self.store.delete(SESSION_KEY) {
            warn!("could not clear saved session: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::store::MemoryStore;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn sample_state() -> GameState {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("apple").unwrap();
        let feedback = Feedback::score(&guess, &target);
        GameState::from_parts(
            5,
            9,
            Some(target),
            Some(b'a'),
            BTreeSet::from([b'p']),
            BTreeSet::from([b'c', b'r', b'n']),
            vec![HistoryEntry {
                guess,
                feedback,
                word_length: 5,
            }],
            false,
            false,
        )
    }

    #[test]
    fn round_trip_preserves_state() {
        let session = SessionStore::new(MemoryStore::new());
        let state = sample_state();

        session.save(&state);
        let loaded = session.load(&config()).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn load_without_save_is_none() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.load(&config()).is_none());
    }

    #[test]
    fn corrupt_snapshot_is_deleted() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json").unwrap();
        let session = SessionStore::new(store);

        assert!(session.load(&config()).is_none());

        // The broken value must be gone so the next load starts clean
        assert!(session.load(&config()).is_none());
        assert_eq!(session.store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn wrong_version_is_discarded() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                r#"{"version":2,"current_level":5,"lives_remaining":10}"#,
            )
            .unwrap();

        assert!(session.load(&config()).is_none());
        assert_eq!(session.store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                r#"{"version":1,"current_level":6,"lives_remaining":4}"#,
            )
            .unwrap();

        let state = session.load(&config()).unwrap();

        assert_eq!(state.current_level(), 6);
        assert_eq!(state.lives_remaining(), 4);
        assert!(state.target_word().is_none());
        assert!(state.required_starting_letter().is_none());
        assert!(state.duplicate_letters().is_empty());
        assert!(state.guess_history().is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn missing_entry_length_falls_back_to_word_length() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                concat!(
                    r#"{"version":1,"current_level":5,"lives_remaining":9,"#,
                    r#""guess_history":[{"word":"crane","feedback":"#,
                    r#"["absent","absent","present","absent","correct"]}]}"#,
                ),
            )
            .unwrap();

        let state = session.load(&config()).unwrap();

        assert_eq!(state.guess_history()[0].word_length, 5);
    }

    #[test]
    fn out_of_range_level_is_discarded() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                r#"{"version":1,"current_level":12,"lives_remaining":10}"#,
            )
            .unwrap();

        assert!(session.load(&config()).is_none());
        assert_eq!(session.store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn mismatched_target_length_is_discarded() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                r#"{"version":1,"current_level":6,"lives_remaining":10,"target_word":"apple"}"#,
            )
            .unwrap();

        assert!(session.load(&config()).is_none());
    }

    #[test]
    fn out_of_range_history_entry_is_discarded() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                concat!(
                    r#"{"version":1,"current_level":5,"lives_remaining":9,"#,
                    r#""guess_history":[{"word":"cat","feedback":"#,
                    r#"["absent","absent","absent"]}]}"#,
                ),
            )
            .unwrap();

        assert!(session.load(&config()).is_none());
    }

    #[test]
    fn mismatched_feedback_length_is_discarded() {
        let session = SessionStore::new(MemoryStore::new());
        session
            .store
            .set(
                SESSION_KEY,
                concat!(
                    r#"{"version":1,"current_level":5,"lives_remaining":9,"#,
                    r#""guess_history":[{"word":"crane","feedback":["absent"]}]}"#,
                ),
            )
            .unwrap();

        assert!(session.load(&config()).is_none());
    }

    #[test]
    fn clear_removes_saved_session() {
        let session = SessionStore::new(MemoryStore::new());
        session.save(&sample_state());

        session.clear();

        assert!(session.load(&config()).is_none());
    }

    #[test]
    fn terminal_state_round_trips() {
        let session = SessionStore::new(MemoryStore::new());
        let target = Word::new("apple").unwrap();
        let state = GameState::from_parts(
            5,
            0,
            Some(target),
            Some(b'a'),
            BTreeSet::new(),
            BTreeSet::new(),
            Vec::new(),
            true,
            false,
        );

        session.save(&state);
        let loaded = session.load(&config()).unwrap();

        assert!(loaded.is_over());
        assert!(!loaded.is_won());
    }
}
