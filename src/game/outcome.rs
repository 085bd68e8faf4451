//! Results of submitting a candidate

use crate::validator::CheckError;
use thiserror::Error;

/// A submission that didn't fail validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Word added to the round
    Accepted {
        word: String,
        /// Score after accepting the word
        score: usize,
    },
    /// Input was empty after normalization; nothing happened
    Ignored,
}

/// Why a candidate was turned down
///
/// Every variant is recoverable and maps to a (title, message) pair for
/// display. `Display` renders the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("You can do better")]
    TooShort,

    #[error("Be more original")]
    AlreadyUsed,

    #[error("You can't just use the word you were given")]
    IsRootWord,

    #[error("You can't spell that word from '{root}'")]
    NotPossible { root: String },

    #[error("You can't make them up, you know")]
    NotReal,

    #[error("Couldn't check that word: {0}")]
    DictionaryUnavailable(#[from] CheckError),
}

impl Rejection {
    /// Short heading for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TooShort => "Really, 3 letters?",
            Self::AlreadyUsed => "Word already used",
            Self::IsRootWord => "Nice try",
            Self::NotPossible { .. } => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::DictionaryUnavailable(_) => "Dictionary unavailable",
        }
    }

    /// Longer explanation for an alert
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
