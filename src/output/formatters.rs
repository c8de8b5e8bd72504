//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackMark};
use std::collections::BTreeSet;

/// Format feedback as an emoji string, one square per letter
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|mark| match mark {
            FeedbackMark::Correct => '🟩',
            FeedbackMark::Present => '🟨',
            FeedbackMark::Absent => '⬜',
        })
        .collect()
}

/// Render the life pool as a bar, one cell per life
#[must_use]
pub fn lives_bar(remaining: u32, max: u32) -> String {
    let max = max as usize;
    let remaining = (remaining as usize).min(max);

    format!("{}{}", "█".repeat(remaining), "░".repeat(max - remaining))
}

/// Join letters for display, uppercased and comma-separated
#[must_use]
pub fn join_letters(letters: &BTreeSet<u8>) -> String {
    letters
        .iter()
        .map(|&b| char::from(b).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
