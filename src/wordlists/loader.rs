//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list {} has no usable {length}-letter words", .path.display())]
    Empty { path: PathBuf, length: usize },
}

/// Load words from a file
///
/// Words are separated by any whitespace. Entries that are not all letters or
/// not `word_length` long are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if no usable word remains.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("config/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, word_length);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
            length: word_length,
        });
    }

    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Split text on whitespace and keep the valid words
#[must_use]
pub fn parse_words(content: &str, word_length: usize) -> Vec<Word> {
    content
        .split_whitespace()
        .filter_map(|token| match Word::with_length(token, word_length) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(token, %err, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, word_length).ok())
        .collect()
}

/// Pick a secret uniformly at random
///
/// Returns `None` for an empty list.
pub fn choose_secret<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
