//! Hidden word representation
//!
//! A `TargetWord` stores the uppercase word along with its distinct letters for
//! fast membership checks.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Word used when none is supplied on the command line
pub const DEFAULT_WORD: &str = "SHREK";

/// The hidden word the player must guess
///
/// Stores the word text and the set of distinct letters it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must not contain whitespace, got {0:?}")]
    ContainsWhitespace(String),
}

impl TargetWord {
    /// Create a new `TargetWord` from a string
    ///
    /// Surrounding whitespace is trimmed and the word is uppercased. Any other
    /// characters are accepted as-is.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed word is empty
    /// - The word contains inner whitespace (it could never be guessed)
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("shrek").unwrap();
    /// assert_eq!(word.text(), "SHREK");
    ///
    /// assert!(TargetWord::new("   ").is_err());
    /// assert!(TargetWord::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace(text));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate over the word's letters in order, duplicates included
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl Default for TargetWord {
    fn default() -> Self {
        Self {
            text: DEFAULT_WORD.to_string(),
            letters: DEFAULT_WORD.chars().collect(),
        }
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Extract the guessed letter from one input token
///
/// Only the first character counts. It is uppercased so that lowercase input
/// matches the uppercase word. Returns `None` for an empty token.
#[must_use]
pub fn letter_from_token(token: &str) -> Option<char> {
    let first = token.chars().next()?;
    Some(first.to_uppercase().next().unwrap_or(first))
}
