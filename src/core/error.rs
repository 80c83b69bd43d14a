//! Error types for word validation and guess evaluation

use thiserror::Error;

/// Rejection reasons for a word or a (secret, guess) pair
///
/// `InvalidWordData` and `InvalidWordLength` are player mistakes and are
/// recoverable within a round. `LengthMismatch` can only be produced by a
/// caller that skipped validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid data, non-letter characters present")]
    InvalidWordData,

    #[error("Invalid data, incorrect length (expected {expected} letters, got {actual})")]
    InvalidWordLength { expected: usize, actual: usize },

    #[error("Secret has {secret} letters but guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },
}

impl GuessError {
    /// Whether this error is a player input problem (as opposed to a wiring bug)
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidWordData | Self::InvalidWordLength { .. })
    }
}
