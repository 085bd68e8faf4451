//! Core domain types for Word Scramble
//!
//! Normalized candidates and letter multisets. Everything here is pure and
//! independent of game state, so the validator and the word finder can share it.

mod candidate;
mod letters;

pub use candidate::{Candidate, MIN_WORD_LEN};
pub use letters::LetterPool;
