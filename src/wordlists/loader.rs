//! Word list loading utilities
//!
//! Start words and the dictionary come either from the lists embedded at
//! build time or from a newline-delimited file chosen on the command line.

use crate::validator::Dictionary;
use log::info;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a word list at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not load start words from {}", path.display())]
    WordListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not load dictionary from {}", path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary {} contains no usable words", path.display())]
    EmptyDictionary { path: PathBuf },
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List compiled into the binary
    Embedded,
    /// Newline-delimited text file
    File(PathBuf),
}

impl WordSource {
    /// Parse a command-line value: `embedded` or a path
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::loader::WordSource;
    ///
    /// assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
    /// assert_eq!(
    ///     WordSource::from_arg("/usr/share/dict/words"),
    ///     WordSource::File("/usr/share/dict/words".into())
    /// );
    /// ```
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Split newline-delimited text into trimmed, non-empty lines
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Load the list root words are drawn from
///
/// An empty list is not an error here: starting a round from it falls back
/// to a fixed root word.
///
/// # Errors
///
/// Returns `LoadError::WordListUnavailable` if the file cannot be read.
pub fn load_start_words(source: &WordSource) -> Result<Vec<String>, LoadError> {
    let words = match source {
        WordSource::Embedded => words_from_slice(super::START_WORDS),
        WordSource::File(path) => {
            let content =
                fs::read_to_string(path).map_err(|source| LoadError::WordListUnavailable {
                    path: path.clone(),
                    source,
                })?;
            words_from_text(&content)
        }
    };

    info!("Loaded {} start words from {source}", words.len());
    Ok(words)
}

/// Load the dictionary used to recognize real words
///
/// # Errors
///
/// Returns `LoadError::DictionaryUnavailable` if the file cannot be read, or
/// `LoadError::EmptyDictionary` if it holds no usable words.
pub fn load_dictionary(source: &WordSource) -> Result<Dictionary, LoadError> {
    let dictionary = match source {
        WordSource::Embedded => Dictionary::from_words(super::DICTIONARY),
        WordSource::File(path) => {
            let content =
                fs::read_to_string(path).map_err(|source| LoadError::DictionaryUnavailable {
                    path: path.clone(),
                    source,
                })?;
            let dictionary = Dictionary::from_words(content.lines());
            if dictionary.is_empty() {
                return Err(LoadError::EmptyDictionary { path: path.clone() });
            }
            dictionary
        }
    };

    info!("Loaded {} dictionary words from {source}", dictionary.len());
    Ok(dictionary)
}
