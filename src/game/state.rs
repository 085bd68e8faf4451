//! Game state: the current round and the rules that guard it

use super::outcome::{Rejection, Submission};
use crate::core::Candidate;
use crate::validator::{self, WordIsRealChecker};
use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Root word used when the start-word list has nothing to offer
pub const FALLBACK_ROOT: &str = "silkworm";

/// One round of play
///
/// Created whole by `GameState::start_round` and replaced whole by the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    root: String,
    used_words: Vec<String>,
    score: usize,
}

impl Round {
    fn new(root: String) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// The word every candidate must be spelled from
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    fn accept(&mut self, word: String) -> usize {
        self.used_words.insert(0, word);
        self.score += 1;
        debug_assert_eq!(self.score, self.used_words.len());
        self.score
    }
}

/// Owns the current round and arbitrates submissions against it
///
/// Generic over the dictionary and the random source so tests can pin both.
pub struct GameState<C, R = StdRng> {
    checker: C,
    rng: R,
    round: Round,
}

impl<C, R> GameState<C, R> {
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.round.root_word()
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round.used_words()
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.round.score()
    }

    #[must_use]
    pub const fn checker(&self) -> &C {
        &self.checker
    }
}

impl<C: WordIsRealChecker> GameState<C, StdRng> {
    /// Create a game with an OS-seeded random source
    ///
    /// No round is active until `start_round` is called.
    #[must_use]
    pub fn new(checker: C) -> Self {
        Self::with_rng(checker, StdRng::from_os_rng())
    }

    /// Create a game whose root words follow a fixed seed
    #[must_use]
    pub fn with_seed(checker: C, seed: u64) -> Self {
        Self::with_rng(checker, StdRng::seed_from_u64(seed))
    }
}

impl<C: WordIsRealChecker, R: Rng> GameState<C, R> {
    #[must_use]
    pub fn with_rng(checker: C, rng: R) -> Self {
        Self {
            checker,
            rng,
            round: Round::default(),
        }
    }

    /// Start a new round with a root drawn uniformly from `word_list`
    ///
    /// Blank entries are ignored; if nothing is left the root falls back to
    /// [`FALLBACK_ROOT`]. Score and used words are reset.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::GameState;
    /// use word_scramble::validator::Dictionary;
    ///
    /// let mut game = GameState::with_seed(Dictionary::default(), 7);
    /// assert_eq!(game.start_round(&["silkworm"]), "silkworm");
    /// assert_eq!(game.score(), 0);
    /// assert!(game.used_words().is_empty());
    /// ```
    pub fn start_round<S: AsRef<str>>(&mut self, word_list: &[S]) -> &str {
        let candidates: Vec<&str> = word_list
            .iter()
            .map(|word| word.as_ref().trim())
            .filter(|word| !word.is_empty())
            .collect();

        let root = candidates
            .choose(&mut self.rng)
            .map_or_else(|| FALLBACK_ROOT.to_string(), |word| word.to_lowercase());

        debug!("Starting round with root word {root:?}");
        self.round = Round::new(root);
        &self.round.root
    }

    /// Submit raw player input
    ///
    /// Input is lowercased and trimmed first; empty input is ignored. Checks
    /// run in a fixed order and stop at the first failure: length, already
    /// used, equal to the root, spelled from the root, real word. On success
    /// the word goes to the front of the used list and the score goes up by one.
    ///
    /// # Errors
    ///
    /// Returns the first `Rejection` the candidate hits. The round is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::{GameState, Rejection, Submission};
    /// use word_scramble::validator::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["eel", "steel"]);
    /// let mut game = GameState::with_seed(dict, 1);
    /// game.start_round(&["sleet"]);
    ///
    /// assert_eq!(
    ///     game.submit(" Eel "),
    ///     Ok(Submission::Accepted { word: "eel".to_string(), score: 1 })
    /// );
    /// assert_eq!(game.submit("EEL"), Err(Rejection::AlreadyUsed));
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<Submission, Rejection> {
        let Some(candidate) = Candidate::new(raw) else {
            return Ok(Submission::Ignored);
        };

        if let Err(rejection) = self.check(&candidate) {
            debug!("Rejected {:?}: {}", candidate.text(), rejection.title());
            return Err(rejection);
        }

        debug!("Accepted {:?}", candidate.text());
        let word = candidate.into_string();
        let score = self.round.accept(word.clone());
        Ok(Submission::Accepted { word, score })
    }

    fn check(&self, candidate: &Candidate) -> Result<(), Rejection> {
        let word = candidate.text();
        let root = self.round.root_word();

        if !candidate.is_long_enough() {
            return Err(Rejection::TooShort);
        }
        if !validator::is_original(word, self.round.used_words()) {
            return Err(Rejection::AlreadyUsed);
        }
        if word == root {
            return Err(Rejection::IsRootWord);
        }
        if !validator::is_possible(word, root) {
            return Err(Rejection::NotPossible {
                root: root.to_string(),
            });
        }
        if !validator::is_real(word, &self.checker)? {
            return Err(Rejection::NotReal);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{CheckError, Dictionary};
    use crate::wordlists::DICTIONARY;

    struct OfflineChecker;

    impl WordIsRealChecker for OfflineChecker {
        fn is_real(&self, _word: &str) -> Result<bool, CheckError> {
            Err(CheckError::new("offline"))
        }
    }

    fn sleet_game() -> GameState<Dictionary> {
        let dict = Dictionary::from_words(["eel", "eels", "steel", "tee", "tees", "see", "sleet"]);
        let mut game = GameState::with_seed(dict, 42);
        game.start_round(&["sleet"]);
        game
    }

    fn accepted(word: &str, score: usize) -> Submission {
        Submission::Accepted {
            word: word.to_string(),
            score,
        }
    }

    #[test]
    fn start_round_single_word() {
        let mut game = GameState::with_seed(Dictionary::default(), 0);
        assert_eq!(game.start_round(&["silkworm"]), "silkworm");
        assert_eq!(game.root_word(), "silkworm");
        assert_eq!(game.score(), 0);
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn start_round_empty_list_uses_fallback() {
        let mut game = GameState::with_seed(Dictionary::default(), 0);
        let empty: [&str; 0] = [];
        assert_eq!(game.start_round(&empty), FALLBACK_ROOT);
    }

    #[test]
    fn start_round_ignores_blank_lines() {
        let mut game = GameState::with_seed(Dictionary::default(), 0);
        for _ in 0..20 {
            assert_eq!(game.start_round(&["", "  ", "sleet", ""]), "sleet");
        }
        assert_eq!(game.start_round(&["", "\r"]), FALLBACK_ROOT);
    }

    #[test]
    fn start_round_normalizes_root() {
        let mut game = GameState::with_seed(Dictionary::default(), 0);
        assert_eq!(game.start_round(&["  Sleet\r"]), "sleet");
    }

    #[test]
    fn start_round_picks_from_list() {
        let words = ["alphabet", "elephant", "sandwich"];
        let mut game = GameState::with_seed(Dictionary::default(), 3);
        for _ in 0..50 {
            let root = game.start_round(&words).to_string();
            assert!(words.contains(&root.as_str()));
        }
    }

    #[test]
    fn start_round_reaches_every_word() {
        let words = ["alphabet", "elephant", "sandwich"];
        let mut game = GameState::with_seed(Dictionary::default(), 11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(game.start_round(&words).to_string());
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn same_seed_same_roots() {
        let words: Vec<String> = DICTIONARY.iter().map(ToString::to_string).collect();
        let mut a = GameState::with_seed(Dictionary::default(), 99);
        let mut b = GameState::with_seed(Dictionary::default(), 99);
        for _ in 0..10 {
            assert_eq!(a.start_round(&words), b.start_round(&words));
        }
    }

    #[test]
    fn start_round_resets_state() {
        let mut game = sleet_game();
        assert!(game.submit("eel").is_ok());
        assert_eq!(game.score(), 1);

        game.start_round(&["silkworm"]);
        assert_eq!(game.score(), 0);
        assert!(game.used_words().is_empty());
        assert_eq!(game.root_word(), "silkworm");
    }

    #[test]
    fn end_to_end_sleet() {
        let mut game = sleet_game();

        assert_eq!(game.submit("eel"), Ok(accepted("eel", 1)));
        assert_eq!(game.used_words(), ["eel"]);
        assert_eq!(game.score(), 1);

        assert_eq!(game.submit("EEL"), Err(Rejection::AlreadyUsed));
        assert_eq!(
            game.submit("xyz"),
            Err(Rejection::NotPossible {
                root: "sleet".to_string()
            })
        );
        assert_eq!(game.submit("xx"), Err(Rejection::TooShort));

        assert_eq!(game.used_words(), ["eel"]);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn possible_but_unknown_word_is_not_real() {
        let mut game = sleet_game();
        assert_eq!(game.submit("tsel"), Err(Rejection::NotReal));
        assert_eq!(game.submit("lets"), Err(Rejection::NotReal));
    }

    #[test]
    fn xyz_not_real_when_root_allows_it() {
        let mut game = GameState::with_seed(Dictionary::from_words(DICTIONARY), 5);
        game.start_round(&["xyzzy"]);
        assert_eq!(game.submit("xyz"), Err(Rejection::NotReal));
    }

    #[test]
    fn too_short_leaves_state_unchanged() {
        let mut game = sleet_game();
        game.submit("eel").unwrap();
        let before = game.round().clone();

        for short in ["xx", "a", "EE", "  st  "] {
            assert_eq!(game.submit(short), Err(Rejection::TooShort));
        }
        assert_eq!(game.round(), &before);
    }

    #[test]
    fn too_short_checked_before_other_rules() {
        let mut game = sleet_game();
        // Not in the root and not a word, but length wins
        assert_eq!(game.submit("zq"), Err(Rejection::TooShort));
    }

    #[test]
    fn already_used_checked_before_dictionary() {
        let dict = Dictionary::from_words(["eel"]);
        let mut game = GameState::with_seed(dict, 0);
        game.start_round(&["sleet"]);
        game.submit("eel").unwrap();
        assert_eq!(game.submit("eel"), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn empty_input_ignored() {
        let mut game = sleet_game();
        let before = game.round().clone();

        assert_eq!(game.submit(""), Ok(Submission::Ignored));
        assert_eq!(game.submit("   \n"), Ok(Submission::Ignored));
        assert_eq!(game.round(), &before);
    }

    #[test]
    fn normalization_idempotent() {
        let mut padded = sleet_game();
        let mut plain = sleet_game();

        assert_eq!(padded.submit("  Eel  "), plain.submit("eel"));
        assert_eq!(padded.round(), plain.round());
    }

    #[test]
    fn root_word_rejected() {
        let mut game = sleet_game();
        assert_eq!(game.submit("Sleet"), Err(Rejection::IsRootWord));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn accepted_words_newest_first() {
        let mut game = sleet_game();
        game.submit("eel").unwrap();
        game.submit("steel").unwrap();
        game.submit("tees").unwrap();

        assert_eq!(game.used_words(), ["tees", "steel", "eel"]);
        assert_eq!(game.score(), 3);
        assert_eq!(game.score(), game.used_words().len());
    }

    #[test]
    fn dictionary_failure_is_distinct_and_non_fatal() {
        let mut game = GameState::with_seed(OfflineChecker, 0);
        game.start_round(&["sleet"]);

        assert_eq!(
            game.submit("eel"),
            Err(Rejection::DictionaryUnavailable(CheckError::new("offline")))
        );
        assert_eq!(game.score(), 0);
        // Earlier rules still apply without touching the dictionary
        assert_eq!(game.submit("xx"), Err(Rejection::TooShort));
    }

    #[test]
    fn bundled_dictionary_round() {
        let mut game = GameState::with_seed(Dictionary::from_words(DICTIONARY), 0);
        game.start_round(&["silkworm"]);

        assert_eq!(game.submit("milk"), Ok(accepted("milk", 1)));
        assert_eq!(game.submit("worms"), Ok(accepted("worms", 2)));
        assert_eq!(
            game.submit("zzzqx"),
            Err(Rejection::NotPossible {
                root: "silkworm".to_string()
            })
        );
    }

    #[test]
    fn used_words_satisfy_round_invariants() {
        let mut game = GameState::with_seed(Dictionary::from_words(DICTIONARY), 0);
        game.start_round(&["sleet"]);
        for attempt in ["eel", "EEL", "steel", "lee", "sleet", "tell", "set", "tees", "see", "xx"] {
            let _ = game.submit(attempt);
        }

        let used = game.used_words();
        assert_eq!(game.score(), used.len());
        for (i, word) in used.iter().enumerate() {
            assert!(word.chars().count() >= 3);
            assert_ne!(word, "sleet");
            assert!(validator::is_possible(word, "sleet"));
            assert!(!used[i + 1..].contains(word));
        }
    }
}
