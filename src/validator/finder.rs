//! Enumerate playable words
//!
//! Applies the length, root-equality and letter rules to every dictionary
//! entry in parallel. Drives the `words` command and the "found N of M"
//! counter.

use super::Dictionary;
use crate::core::{LetterPool, MIN_WORD_LEN};
use rayon::prelude::*;
use std::cmp::Reverse;

/// All dictionary words that could be accepted against `root`
///
/// Sorted longest first, then alphabetically. The root itself is excluded.
///
/// # Examples
/// ```
/// use word_scramble::validator::{Dictionary, possible_words};
///
/// let dict = Dictionary::from_words(["eel", "steel", "sleet", "tell", "see", "at"]);
/// let words = possible_words("sleet", &dict);
/// assert_eq!(words, vec!["steel", "eel", "see"]);
/// ```
#[must_use]
pub fn possible_words<'a>(root: &str, dictionary: &'a Dictionary) -> Vec<&'a str> {
    let pool = LetterPool::of(root);

    let mut words: Vec<&str> = dictionary
        .words()
        .par_iter()
        .map(String::as_str)
        .filter(|word| {
            word.chars().count() >= MIN_WORD_LEN && *word != root && pool.can_spell(word)
        })
        .collect();

    words.sort_unstable_by_key(|word| (Reverse(word.chars().count()), *word));
    words
}
