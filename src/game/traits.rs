//! Collaborator seams: where the core reaches outside itself
//!
//! The state machine and controller only ever talk to a word supply, a
//! dictionary and a key-value store through these traits. The shipped
//! implementations live in `wordlists` and `persist`; tests substitute
//! scripted doubles.

use crate::core::Word;
use std::fmt;

/// Supplies candidate target words for level setup
pub trait WordSource {
    /// Words of exactly `length` letters, all starting with `starting_letter`
    /// when one is given
    ///
    /// An empty list is a legitimate answer; the caller treats it the same
    /// as [`WordSourceError::NoCandidates`].
    ///
    /// # Errors
    /// Returns `WordSourceError` when the source itself fails.
    fn candidate_words(
        &self,
        length: usize,
        starting_letter: Option<u8>,
    ) -> Result<Vec<Word>, WordSourceError>;
}

/// Checks whether a guessed word exists in the dictionary
pub trait Validator {
    /// `Ok(true)` / `Ok(false)` are definitive answers; any `Err` means the
    /// lookup could not be completed and the turn should be retried
    ///
    /// # Errors
    /// Returns `ValidatorError` when the dictionary cannot be reached.
    fn word_exists(&self, word: &Word) -> Result<bool, ValidatorError>;
}

/// Error type for word-supply failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// The source has no words matching the requested length and constraint
    NoCandidates {
        length: usize,
        starting_letter: Option<u8>,
    },
    /// The source itself failed
    Unavailable(String),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates {
                length,
                starting_letter: Some(letter),
            } => write!(
                f,
                "No {length}-letter words starting with '{}' available",
                char::from(*letter).to_ascii_uppercase()
            ),
            Self::NoCandidates {
                length,
                starting_letter: None,
            } => write!(f, "No {length}-letter words available"),
            Self::Unavailable(reason) => write!(f, "Word source unavailable: {reason}"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Error type for dictionary lookups that could not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorError(pub String);

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word lookup failed: {}", self.0)
    }
}

impl std::error::Error for ValidatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_source_error_messages() {
        let err = WordSourceError::NoCandidates {
            length: 7,
            starting_letter: Some(b'q'),
        };
        assert_eq!(
            err.to_string(),
            "No 7-letter words starting with 'Q' available"
        );

        let err = WordSourceError::NoCandidates {
            length: 7,
            starting_letter: None,
        };
        assert_eq!(err.to_string(), "No 7-letter words available");
    }

    #[test]
    fn validator_error_message() {
        let err = ValidatorError("connection refused".to_string());
        assert_eq!(err.to_string(), "Word lookup failed: connection refused");
    }
}
