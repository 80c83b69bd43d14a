//! Wordle Game
//!
//! A terminal word-guessing game with exact duplicate-letter scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//!
//! let secret = Word::new("otter").unwrap();
//! let guess = Word::new("toott").unwrap();
//!
//! // T(present) O(present) O(absent) T(present) T(absent)
//! let feedback = evaluate(&secret, &guess).unwrap();
//! assert_eq!(feedback.to_string(), "PPAPA");
//! ```

// Core domain types
pub mod core;

// Session state machine and collaborator seams
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
