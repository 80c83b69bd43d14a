//! Secret word supply
//!
//! Provides the embedded default list, a file loader for custom lists and
//! uniform random secret selection.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordListError, choose_secret, load_from_file, words_from_slice};
