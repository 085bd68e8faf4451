//! Word check command
//!
//! Runs a single candidate through the full rule set against a given root.

use super::{CommandError, normalize_root};
use crate::core::Candidate;
use crate::game::{GameState, Rejection, Submission};
use crate::validator::WordIsRealChecker;

/// Result of checking one word
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub outcome: Result<Submission, Rejection>,
}

impl CheckResult {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self.outcome, Ok(Submission::Accepted { .. }))
    }
}

/// Check `word` as the first submission of a round rooted at `root`
///
/// # Errors
///
/// Returns [`CommandError::BlankRoot`] if `root` is empty or whitespace.
///
/// # Examples
/// ```
/// use word_scramble::commands::check_word;
/// use word_scramble::validator::Dictionary;
///
/// let dict = Dictionary::from_words(["eel"]);
/// assert!(check_word("sleet", "eel", &dict).unwrap().accepted());
/// assert!(!check_word("sleet", "tell", &dict).unwrap().accepted());
/// assert!(check_word("  ", "eel", &dict).is_err());
/// ```
pub fn check_word<C: WordIsRealChecker>(
    root: &str,
    word: &str,
    checker: C,
) -> Result<CheckResult, CommandError> {
    let root = normalize_root(root)?;
    let mut game = GameState::with_seed(checker, 0);
    game.start_round(&[root.as_str()]);
    let outcome = game.submit(word);

    Ok(CheckResult {
        root,
        word: Candidate::new(word).map_or_else(String::new, Candidate::into_string),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Dictionary;
    use crate::wordlists::DICTIONARY;

    #[test]
    fn check_accepts_real_word() {
        let dict = Dictionary::from_words(DICTIONARY);
        let result = check_word("sleet", "Steel", &dict).unwrap();

        assert_eq!(result.root, "sleet");
        assert_eq!(result.word, "steel");
        assert!(result.accepted());
        assert_eq!(
            result.outcome,
            Ok(Submission::Accepted {
                word: "steel".to_string(),
                score: 1
            })
        );
    }

    #[test]
    fn check_reports_rejection() {
        let dict = Dictionary::from_words(DICTIONARY);

        let outcome = |word: &str| check_word("sleet", word, &dict).unwrap().outcome;

        assert_eq!(outcome("xx"), Err(Rejection::TooShort));
        assert_eq!(outcome("sleet"), Err(Rejection::IsRootWord));
        assert_eq!(outcome("tsel"), Err(Rejection::NotReal));
        assert!(matches!(outcome("tell"), Err(Rejection::NotPossible { .. })));
    }

    #[test]
    fn check_empty_word_ignored() {
        let dict = Dictionary::default();
        let result = check_word("sleet", "  ", &dict).unwrap();
        assert_eq!(result.word, "");
        assert_eq!(result.outcome, Ok(Submission::Ignored));
        assert!(!result.accepted());
    }

    #[test]
    fn check_blank_root_rejected() {
        // "milk" is playable against the fallback root, which must not be used here
        let dict = Dictionary::from_words(["milk"]);

        assert_eq!(check_word("", "milk", &dict).err(), Some(CommandError::BlankRoot));
        assert_eq!(check_word(" \n ", "milk", &dict).err(), Some(CommandError::BlankRoot));
    }

    #[test]
    fn check_normalizes_root() {
        let dict = Dictionary::from_words(["eel"]);
        let result = check_word("  SLEET ", "eel", &dict).unwrap();
        assert_eq!(result.root, "sleet");
        assert!(result.accepted());
    }
}
