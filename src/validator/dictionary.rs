//! Dictionary lookup
//!
//! The game never decides on its own whether a string is an English word; it
//! asks a `WordIsRealChecker`. The bundled implementation is an in-memory
//! word set, and tests swap in small hand-built sets.

use log::trace;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Language every checker answers for
pub const LANGUAGE: &str = "en";

/// Failure of the checker itself, as opposed to a word it doesn't know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dictionary unavailable: {reason}")]
pub struct CheckError {
    reason: String,
}

impl CheckError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Capability to decide whether a string is a correctly spelled English word
///
/// The whole string is checked as one word; callers pass normalized
/// lowercase text.
pub trait WordIsRealChecker {
    /// Returns `Ok(true)` for a known word, `Ok(false)` for anything else
    ///
    /// # Errors
    ///
    /// Returns `CheckError` if the lookup itself could not be performed.
    fn is_real(&self, word: &str) -> Result<bool, CheckError>;

    /// Language the checker answers for
    fn language(&self) -> &str {
        LANGUAGE
    }
}

impl<T: WordIsRealChecker + ?Sized> WordIsRealChecker for &T {
    fn is_real(&self, word: &str) -> Result<bool, CheckError> {
        (**self).is_real(word)
    }

    fn language(&self) -> &str {
        (**self).language()
    }
}

impl<T: WordIsRealChecker + ?Sized> WordIsRealChecker for Box<T> {
    fn is_real(&self, word: &str) -> Result<bool, CheckError> {
        (**self).is_real(word)
    }

    fn language(&self) -> &str {
        (**self).language()
    }
}

/// In-memory English word set
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased. Blank entries and entries with
    /// anything other than letters (possessives, hyphenations, abbreviations
    /// with dots) are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validator::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Cat", "dog's", "", "eel"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("cat"));
    /// assert!(!dict.contains("dog's"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| {
                let word = entry.as_ref().trim();
                if word.is_empty() {
                    return None;
                }
                if !word.chars().all(char::is_alphabetic) {
                    trace!("Skipping dictionary entry {word:?}");
                    return None;
                }
                Some(word.to_lowercase())
            })
            .collect();

        Self { words }
    }

    /// Check if a word exists in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }
}

impl WordIsRealChecker for Dictionary {
    fn is_real(&self, word: &str) -> Result<bool, CheckError> {
        Ok(self.contains(word))
    }
}
