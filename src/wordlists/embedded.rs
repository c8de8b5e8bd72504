//! Embedded word lists
//!
//! One list per level length, compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/word_lists.rs"));

/// Word lengths the binary ships lists for
pub const LENGTHS: [usize; 5] = [5, 6, 7, 8, 9];

/// The embedded list for the given word length, if one is shipped
#[must_use]
pub fn for_length(length: usize) -> Option<&'static [&'static str]> {
    match length {
        5 => Some(WORDS_5),
        6 => Some(WORDS_6),
        7 => Some(WORDS_7),
        8 => Some(WORDS_8),
        9 => Some(WORDS_9),
        _ => None,
    }
}
