//! The in-memory lexicon
//!
//! Words binned by length, serving both game roles at once: supplying
//! target candidates for a level and validating guessed words. A local
//! lexicon never fails a lookup, so validation is always decisive.

use crate::core::Word;
use crate::game::{Validator, ValidatorError, WordSource, WordSourceError};
use crate::wordlists::{embedded, loader};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;

/// Most candidates handed out per request
const CANDIDATE_POOL_LIMIT: usize = 100;

/// Words grouped by length
pub struct Lexicon {
    by_length: FxHashMap<usize, Vec<Word>>,
}

impl Lexicon {
    /// Lexicon over the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut by_length = FxHashMap::default();
        for length in embedded::LENGTHS {
            if let Some(list) = embedded::for_length(length) {
                by_length.insert(length, loader::words_from_slice(list));
            }
        }
        Self { by_length }
    }

    /// Lexicon over a newline-separated word file
    ///
    /// Words of every length mix freely in the file and are binned here.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(loader::load_from_file(path)?))
    }

    /// Lexicon over an arbitrary word collection
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }
        Self { by_length }
    }

    /// True when the word appears in the lexicon
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.by_length
            .get(&word.len())
            .is_some_and(|words| words.contains(word))
    }

    /// Number of words of the given length
    #[must_use]
    pub fn count_of(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// True when every length in the range has at least one word
    #[must_use]
    pub fn covers(&self, lengths: RangeInclusive<usize>) -> bool {
        lengths.into_iter().all(|length| self.count_of(length) > 0)
    }
}

impl WordSource for Lexicon {
    fn candidate_words(
        &self,
        length: usize,
        starting_letter: Option<u8>,
    ) -> Result<Vec<Word>, WordSourceError> {
        let no_candidates = || WordSourceError::NoCandidates {
            length,
            starting_letter,
        };

        let words = self.by_length.get(&length).ok_or_else(no_candidates)?;
        let matching: Vec<&Word> = words
            .iter()
            .filter(|w| starting_letter.is_none_or(|c| w.first_letter() == c))
            .collect();
        if matching.is_empty() {
            return Err(no_candidates());
        }

        // Sample rather than truncate so the pool is not biased toward the
        // front of the list
        let pool = matching
            .choose_multiple(&mut rand::rng(), CANDIDATE_POOL_LIMIT)
            .map(|w| (*w).clone())
            .collect();
        Ok(pool)
    }
}

impl Validator for Lexicon {
    fn word_exists(&self, word: &Word) -> Result<bool, ValidatorError> {
        Ok(self.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn embedded_covers_every_level_length() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.covers(5..=9));
        assert_eq!(lexicon.count_of(4), 0);
    }

    #[test]
    fn from_words_bins_by_length() {
        let lexicon = Lexicon::from_words(words(&["apple", "crane", "abacus"]));

        assert_eq!(lexicon.count_of(5), 2);
        assert_eq!(lexicon.count_of(6), 1);
        assert_eq!(lexicon.count_of(7), 0);
        assert!(lexicon.covers(5..=6));
        assert!(!lexicon.covers(5..=7));
    }

    #[test]
    fn contains_matches_exact_words_only() {
        let lexicon = Lexicon::from_words(words(&["apple", "crane"]));

        assert!(lexicon.contains(&Word::new("apple").unwrap()));
        assert!(!lexicon.contains(&Word::new("brine").unwrap()));
        assert!(!lexicon.contains(&Word::new("applesauce").unwrap()));
    }

    #[test]
    fn candidates_match_requested_length() {
        let lexicon = Lexicon::from_words(words(&["apple", "crane", "abacus"]));

        let pool = lexicon.candidate_words(5, None).unwrap();

        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|w| w.len() == 5));
    }

    #[test]
    fn candidates_respect_starting_letter() {
        let lexicon = Lexicon::from_words(words(&["apple", "crane", "angel"]));

        let pool = lexicon.candidate_words(5, Some(b'a')).unwrap();

        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|w| w.first_letter() == b'a'));
    }

    #[test]
    fn no_matching_length_is_an_error() {
        let lexicon = Lexicon::from_words(words(&["apple"]));

        let err = lexicon.candidate_words(7, None).unwrap_err();

        assert_eq!(
            err,
            WordSourceError::NoCandidates {
                length: 7,
                starting_letter: None
            }
        );
    }

    #[test]
    fn no_matching_letter_is_an_error() {
        let lexicon = Lexicon::from_words(words(&["apple"]));

        let err = lexicon.candidate_words(5, Some(b'z')).unwrap_err();

        assert_eq!(
            err,
            WordSourceError::NoCandidates {
                length: 5,
                starting_letter: Some(b'z')
            }
        );
    }

    #[test]
    fn candidate_pool_is_capped() {
        // 150 distinct five-letter words
        let mut list = Vec::new();
        for i in 0..150u8 {
            let first = b'a' + i / 26;
            let second = b'a' + i % 26;
            let text = format!("{}{}xyz", char::from(first), char::from(second));
            list.push(Word::new(text).unwrap());
        }
        let lexicon = Lexicon::from_words(list);

        let pool = lexicon.candidate_words(5, None).unwrap();

        assert_eq!(pool.len(), CANDIDATE_POOL_LIMIT);
    }

    #[test]
    fn small_bins_are_returned_whole() {
        let lexicon = Lexicon::from_words(words(&["apple", "angel"]));

        let pool = lexicon.candidate_words(5, None).unwrap();

        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn lexicon_validates_its_own_words() {
        let lexicon = Lexicon::from_words(words(&["apple"]));

        assert_eq!(
            lexicon.word_exists(&Word::new("apple").unwrap()),
            Ok(true)
        );
        assert_eq!(
            lexicon.word_exists(&Word::new("zzzzz").unwrap()),
            Ok(false)
        );
    }

    #[test]
    fn embedded_lexicon_validates_embedded_words() {
        let lexicon = Lexicon::embedded();
        let list = embedded::for_length(5).unwrap();
        let sample = Word::new(list[0]).unwrap();

        assert_eq!(lexicon.word_exists(&sample), Ok(true));
    }
}
