//! Possible words command
//!
//! Lists every dictionary word that can be played against a root.

use super::{CommandError, normalize_root};
use crate::validator::{Dictionary, possible_words};

/// Result of listing the words in a root
pub struct WordsResult {
    pub root: String,
    pub words: Vec<String>,
    pub dictionary_size: usize,
}

/// List all playable words for `root`, longest first
///
/// # Errors
///
/// Returns [`CommandError::BlankRoot`] if `root` is empty or whitespace.
pub fn list_words(root: &str, dictionary: &Dictionary) -> Result<WordsResult, CommandError> {
    let root = normalize_root(root)?;
    let words = possible_words(&root, dictionary)
        .into_iter()
        .map(ToString::to_string)
        .collect();

    Ok(WordsResult {
        root,
        words,
        dictionary_size: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_words_normalizes_root() {
        let dict = Dictionary::from_words(["eel", "steel", "sleet"]);
        let result = list_words("  SLEET ", &dict).unwrap();

        assert_eq!(result.root, "sleet");
        assert_eq!(result.words, vec!["steel", "eel"]);
        assert_eq!(result.dictionary_size, 3);
    }

    #[test]
    fn list_words_none_found() {
        let dict = Dictionary::from_words(["cat"]);
        let result = list_words("sleet", &dict).unwrap();
        assert!(result.words.is_empty());
    }

    #[test]
    fn list_words_blank_root_rejected() {
        let dict = Dictionary::from_words(["eel"]);
        assert_eq!(list_words("", &dict).err(), Some(CommandError::BlankRoot));
        assert_eq!(list_words("   ", &dict).err(), Some(CommandError::BlankRoot));
    }
}
