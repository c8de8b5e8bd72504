//! Playable word representation
//!
//! A Word stores a lowercase word of whatever length the active level calls
//! for. Guesses and target words share this type.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// A lowercase word of arbitrary per-level length
///
/// Construction normalizes case and rejects anything outside `a-z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the input:
    /// - Is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordclimb::core::Word;
    ///
    /// let word = Word::new("Abandon").unwrap();
    /// assert_eq!(word.text(), "abandon");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
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

    /// Always false: construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.text.as_bytes().contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.text.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Letters that appear two or more times in the word
    #[must_use]
    pub fn duplicate_letters(&self) -> BTreeSet<u8> {
        self.letter_counts()
            .into_iter()
            .filter(|&(_, count)| count >= 2)
            .map(|(letter, _)| letter)
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
