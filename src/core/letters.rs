//! Letter multisets
//!
//! A `LetterPool` counts how many times each letter occurs in a word. Spelling
//! a candidate from the pool consumes one occurrence per letter, so repeated
//! letters in the candidate need repeated letters in the pool.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterPool {
    /// Build the pool of letters in `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::of("sleet");
    /// assert_eq!(pool.count('e'), 2);
    /// assert_eq!(pool.count('z'), 0);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        let mut total = 0;
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// How many occurrences of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters remaining
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy and stops at the first letter that has run out.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::of("sleet");
    /// assert!(pool.can_spell("eel"));
    /// assert!(!pool.can_spell("tell"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }
}
