//! Wordclimb
//!
//! A progressive word-guessing game: clear a five-letter word and you climb to
//! a six-letter one, on up to nine letters, all on one shared pool of lives.
//! Sessions are saved after every turn and resume where they left off.
//!
//! # Quick Start
//!
//! ```rust
//! use wordclimb::core::{Feedback, FeedbackMark, Word};
//!
//! // Score a guess against a target of the same length
//! let guess = Word::new("apply").unwrap();
//! let target = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::score(&guess, &target);
//! assert_eq!(feedback.marks()[0], FeedbackMark::Correct);
//! assert!(!feedback.is_all_correct());
//! ```

// Core domain types
pub mod core;

// Game state machine and orchestration
pub mod game;

// Session persistence
pub mod persist;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
