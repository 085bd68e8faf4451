//! Player-submitted candidate words
//!
//! A `Candidate` is the normalized form of raw player input: lowercased and
//! trimmed of surrounding whitespace and newlines.

use std::fmt;

/// Shortest word length the game accepts
pub const MIN_WORD_LEN: usize = 3;

/// A normalized, non-empty candidate word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize raw input into a candidate
    ///
    /// Returns `None` when nothing is left after trimming, which callers treat
    /// as a silent no-op rather than an error.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::new("  Eel \n").unwrap();
    /// assert_eq!(candidate.text(), "eel");
    ///
    /// assert!(Candidate::new("   ").is_none());
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Get the normalized word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counted in characters rather than bytes
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the candidate is long enough to be played
    #[inline]
    #[must_use]
    pub fn is_long_enough(&self) -> bool {
        self.letter_count() >= MIN_WORD_LEN
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_lowercased_and_trimmed() {
        let candidate = Candidate::new("  SLEET\t\n").unwrap();
        assert_eq!(candidate.text(), "sleet");
    }

    #[test]
    fn candidate_normalization_is_idempotent() {
        let once = Candidate::new("  Eel  ").unwrap();
        let twice = Candidate::new(once.text()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, Candidate::new("eel").unwrap());
    }

    #[test]
    fn empty_input_is_not_a_candidate() {
        assert!(Candidate::new("").is_none());
        assert!(Candidate::new(" \t\r\n ").is_none());
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let candidate = Candidate::new(" ice cream ").unwrap();
        assert_eq!(candidate.text(), "ice cream");
    }

    #[test]
    fn letter_count_uses_characters() {
        let candidate = Candidate::new("café").unwrap();
        assert_eq!(candidate.letter_count(), 4);
        assert_eq!(candidate.text().len(), 5);
    }

    #[test]
    fn minimum_length_boundary() {
        assert!(!Candidate::new("xx").unwrap().is_long_enough());
        assert!(Candidate::new("eel").unwrap().is_long_enough());
    }

    #[test]
    fn candidate_display() {
        let candidate = Candidate::new("Steel").unwrap();
        assert_eq!(format!("{candidate}"), "steel");
    }
}
