//! Game configuration

/// Letters per word in a standard game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Fixed parameters of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}
