//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterClass, Word};

/// Plain-text rendering of a scored guess: `[W]` exact, `(A)` present, ` T ` absent
///
/// Used where color is unavailable (piped output, logs).
#[must_use]
pub fn plain_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.iter())
        .map(|(letter, class)| match class {
            LetterClass::Exact => format!("[{letter}]"),
            LetterClass::Present => format!("({letter})"),
            LetterClass::Absent => format!(" {letter} "),
        })
        .collect()
}

/// "2/5" style attempt counter
#[must_use]
pub fn attempt_counter(attempt: usize, max_attempts: usize) -> String {
    format!("{attempt}/{max_attempts}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
