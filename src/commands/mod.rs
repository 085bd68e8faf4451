//! Command implementations

pub mod check;
pub mod simple;
pub mod words;

pub use check::{CheckResult, check_word};
pub use simple::run_simple;
pub use words::{WordsResult, list_words};

use crate::core::Candidate;
use thiserror::Error;

/// Invalid command input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("root word must not be blank")]
    BlankRoot,
}

/// Normalize a root word given on the command line
fn normalize_root(root: &str) -> Result<String, CommandError> {
    Candidate::new(root)
        .map(Candidate::into_string)
        .ok_or(CommandError::BlankRoot)
}
