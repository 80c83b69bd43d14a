//! Core domain types for Wordle
//!
//! This module contains the pure scoring core: word normalization, guess
//! validation and guess evaluation. Nothing here performs I/O or holds
//! presentation state, so every function is safe to call concurrently.

mod error;
mod feedback;
mod validate;
mod word;

pub use error::GuessError;
pub use feedback::{Feedback, LetterClass, evaluate};
pub use validate::{validate_alphabetic, validate_guess, validate_length};
pub use word::{Word, normalize};
