//! Guess feedback calculation and representation
//!
//! Feedback marks each guess position as correct (right letter, right spot),
//! present (right letter, wrong spot) or absent. Duplicate letters are handled
//! with multiset accounting: a letter can only earn as many correct/present
//! marks as it has occurrences in the target.

use super::Word;
use serde::{Deserialize, Serialize};

/// Per-position result of comparing a guess letter to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMark {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the target, but not at this position
    Present,
    /// No remaining occurrence of this letter in the target
    Absent,
}

/// Feedback for a whole guess: one mark per letter position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    marks: Vec<FeedbackMark>,
}

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// Both words must have the same length; the caller guarantees this.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume that
    ///    letter's count in the target.
    /// 2. Second pass, left to right: an unmarked position is `Present` while
    ///    its letter still has count left, `Absent` otherwise.
    ///
    /// The left-to-right second pass gives leftover `Present` marks to the
    /// left-most occurrences when the guess repeats a letter more often than
    /// the target contains it.
    ///
    /// # Examples
    /// ```
    /// use wordclimb::core::{Feedback, FeedbackMark, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alarm").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // L(absent) L(correct) A(correct) M(present) A(present)
    /// // The guess has two Ls but the target only one, so only the
    /// // exact match scores; the earlier L goes empty-handed.
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[
    ///         FeedbackMark::Absent,
    ///         FeedbackMark::Correct,
    ///         FeedbackMark::Correct,
    ///         FeedbackMark::Present,
    ///         FeedbackMark::Present,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must be the same length"
        );

        let mut marks = vec![FeedbackMark::Absent; target.len()];
        let mut remaining = target.letter_counts();

        // First pass: exact matches consume the letter budget first
        for (i, (&g, &t)) in guess.bytes().iter().zip(target.bytes()).enumerate() {
            if g == t {
                marks[i] = FeedbackMark::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: left to right, a present mark spends one remaining count
        for (i, &g) in guess.bytes().iter().enumerate() {
            if marks[i] == FeedbackMark::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                marks[i] = FeedbackMark::Present;
                *count -= 1;
            }
        }

        Self { marks }
    }

    /// The marks, one per guess position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[FeedbackMark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for the zero-length feedback (never produced by `score`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate over the marks by value
    pub fn iter(&self) -> impl Iterator<Item = FeedbackMark> + '_ {
        self.marks.iter().copied()
    }

    /// True when every position is `Correct` (the guess equals the target)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.marks.iter().all(|&m| m == FeedbackMark::Correct)
    }
}

impl From<Vec<FeedbackMark>> for Feedback {
    /// Reassemble feedback from marks recorded elsewhere
    fn from(marks: Vec<FeedbackMark>) -> Self {
        Self { marks }
    }
}
