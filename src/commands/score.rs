//! One-shot guess scoring
//!
//! Scores a single guess against a given secret without starting a session.

use crate::core::{Feedback, GuessError, Word, evaluate};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// The guess must have as many letters as the secret.
///
/// # Errors
///
/// Returns a [`GuessError`] if either word contains non-letters or if the
/// guess length differs from the secret's.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, GuessError> {
    let secret = Word::new(secret)?;
    let guess = Word::with_length(guess, secret.len())?;
    let feedback = evaluate(&secret, &guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
