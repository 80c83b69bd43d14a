//! Word representation
//!
//! A `Word` is a normalized, ordered sequence of letters. It serves both as
//! the session's secret and as a player's guess.

use super::GuessError;
use super::validate::{validate_alphabetic, validate_guess};
use rustc_hash::FxHashMap;
use std::fmt;

/// A normalized word: trimmed, upper-cased, letters only
///
/// Letters are stored as `char`s so every position is one letter, whatever
/// its UTF-8 width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Trim surrounding whitespace and convert to the canonical (upper) case
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl Word {
    /// Create a word of any length from raw text
    ///
    /// # Errors
    /// Returns [`GuessError::InvalidWordData`] if the normalized text is empty
    /// or contains a non-letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("  water\n").unwrap();
    /// assert_eq!(word.text(), "WATER");
    ///
    /// assert!(Word::new("wat3r").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, GuessError> {
        let text = normalize(raw.as_ref());
        validate_alphabetic(&text)?;
        Ok(Self::from_normalized(text))
    }

    /// Create a word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns [`GuessError::InvalidWordData`] before
    /// [`GuessError::InvalidWordLength`] when both apply.
    pub fn with_length(raw: impl AsRef<str>, length: usize) -> Result<Self, GuessError> {
        let text = normalize(raw.as_ref());
        validate_guess(&text, length)?;
        Ok(Self::from_normalized(text))
    }

    fn from_normalized(text: String) -> Self {
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Count of each distinct letter in the word
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
