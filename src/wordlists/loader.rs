//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines may hold words of any length; blank lines and entries that are not
/// purely letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordclimb::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordclimb::wordlists::{for_length, loader::words_from_slice};
///
/// let list = for_length(5).unwrap();
/// let words = words_from_slice(list);
/// assert_eq!(words.len(), list.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "abandon"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "abandon");
        assert_eq!(words[2].len(), 7);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "no-go", "slate", "it's"];
        let words = words_from_slice(input);

        // Only purely alphabetic entries survive
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_trims_and_skips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  crane  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "don't").unwrap();
        writeln!(file, "ABACUS").unwrap();
        file.flush().unwrap();

        let words = load_from_file(file.path()).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "abacus");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
