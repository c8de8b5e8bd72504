//! Word lists for the climb
//!
//! Provides embedded word lists compiled into the binary, a loader for
//! custom lists, and the [`Lexicon`] the game draws targets from and
//! validates guesses against.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{for_length, LENGTHS};
pub use lexicon::Lexicon;
