//! Core domain types
//!
//! This module contains the fundamental domain types with no game-flow
//! dependencies. All types here are pure, testable, and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackMark};
pub use word::{Word, WordError};
