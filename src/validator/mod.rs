//! Word validation rules
//!
//! Stateless predicates a candidate has to pass before it is accepted, plus
//! the dictionary capability they delegate to and a finder that applies the
//! same rules to a whole dictionary.

pub mod dictionary;
mod finder;

pub use dictionary::{CheckError, Dictionary, LANGUAGE, WordIsRealChecker};
pub use finder::possible_words;

use crate::core::LetterPool;

/// Check that a candidate hasn't been played yet
///
/// Exact match; callers normalize case beforehand.
///
/// # Examples
/// ```
/// use word_scramble::validator::is_original;
///
/// let used = vec!["eel".to_string(), "steel".to_string()];
/// assert!(is_original("tees", &used));
/// assert!(!is_original("eel", &used));
/// ```
#[must_use]
pub fn is_original(candidate: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == candidate)
}

/// Check that a candidate can be spelled from the root's letters
///
/// Each letter of the root can be used once per occurrence.
///
/// # Examples
/// ```
/// use word_scramble::validator::is_possible;
///
/// assert!(is_possible("eel", "sleet"));
/// assert!(is_possible("eels", "sleet"));
/// assert!(!is_possible("tell", "sleet"));
/// ```
#[must_use]
pub fn is_possible(candidate: &str, root: &str) -> bool {
    LetterPool::of(root).can_spell(candidate)
}

/// Ask the dictionary whether a candidate is a real English word
///
/// # Errors
///
/// Propagates `CheckError` when the checker could not answer.
pub fn is_real<C: WordIsRealChecker + ?Sized>(
    candidate: &str,
    checker: &C,
) -> Result<bool, CheckError> {
    checker.is_real(candidate)
}
