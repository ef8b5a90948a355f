//! Set of attempted letters
//!
//! Keeps insertion order so the history can be shown in the order played.

/// Every letter the player has attempted, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet {
    letters: Vec<char>,
}

impl GuessSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a letter
    ///
    /// Returns `false` and leaves the set unchanged if the letter was already present.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over letters in the order they were guessed
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
