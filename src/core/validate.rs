//! Guess admissibility checks
//!
//! Both checks are pure and operate on already-trimmed text. They do not
//! change case. [`validate_guess`] applies them in precedence order: the
//! alphabetic check runs first, so text that is both non-alphabetic and the
//! wrong length reports [`GuessError::InvalidWordData`].

use super::GuessError;

/// Reject empty text and any text containing a non-letter character
///
/// "Letter" means any Unicode alphabetic scalar value, not just ASCII.
///
/// # Errors
/// Returns [`GuessError::InvalidWordData`] for empty text or when whitespace,
/// digits, punctuation or symbols are present.
///
/// # Examples
/// ```
/// use wordle_game::core::{GuessError, validate_alphabetic};
///
/// assert!(validate_alphabetic("WATER").is_ok());
/// assert_eq!(validate_alphabetic("Word1"), Err(GuessError::InvalidWordData));
/// ```
pub fn validate_alphabetic(text: &str) -> Result<(), GuessError> {
    if text.is_empty() || !text.chars().all(char::is_alphabetic) {
        return Err(GuessError::InvalidWordData);
    }
    Ok(())
}

/// Reject text whose letter count differs from `expected`
///
/// Counts characters, not bytes.
///
/// # Errors
/// Returns [`GuessError::InvalidWordLength`] carrying both counts.
pub fn validate_length(text: &str, expected: usize) -> Result<(), GuessError> {
    let actual = text.chars().count();
    if actual != expected {
        return Err(GuessError::InvalidWordLength { expected, actual });
    }
    Ok(())
}

/// Run both checks in precedence order
///
/// # Errors
/// Returns the first failing check's error.
pub fn validate_guess(text: &str, expected: usize) -> Result<(), GuessError> {
    validate_alphabetic(text)?;
    validate_length(text, expected)
}
