//! Word Scramble
//!
//! An anagram word game: a root word is drawn at random and the player finds
//! real words of three or more letters hidden in its letters. Each accepted
//! word scores one point.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::game::{GameState, Rejection, Submission};
//! use word_scramble::validator::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["eel", "steel", "tees"]);
//! let mut game = GameState::with_seed(dictionary, 7);
//! game.start_round(&["sleet"]);
//!
//! assert!(matches!(game.submit("steel"), Ok(Submission::Accepted { score: 1, .. })));
//! assert_eq!(game.submit("xx"), Err(Rejection::TooShort));
//! ```

// Core domain types
pub mod core;

// Validation rules and dictionary lookup
pub mod validator;

// Round state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
