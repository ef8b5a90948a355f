//! Game session state
//!
//! Tracks the hidden word and the guessed letters. Remaining attempts and the
//! win/loss state are always derived from those two, never stored.

use super::{GuessSet, TargetWord};

/// Number of incorrect guesses allowed before the game is lost
pub const MAX_ATTEMPTS: usize = 10;

/// Highest figure stage; the final fatal guess ends the game instead of drawing more
pub const MAX_STAGE: usize = MAX_ATTEMPTS - 1;

/// Letters offered to the player, in display order
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Whole-game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of taking a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter that appears in the word
    Hit,
    /// New letter that does not appear in the word
    Miss,
    /// Letter was guessed before; nothing changed
    AlreadyUsed,
}

/// A single game of hangman
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    word: TargetWord,
    guesses: GuessSet,
}

impl GameSession {
    #[must_use]
    pub fn new(word: TargetWord) -> Self {
        Self {
            word,
            guesses: GuessSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &TargetWord {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    /// Replace the hidden word
    ///
    /// Guessed letters are kept; use [`GameSession::reset`] to start over.
    pub fn set_word(&mut self, word: TargetWord) {
        self.word = word;
    }

    /// Record a guessed letter
    ///
    /// The letter is stored exactly as given. Callers normalize case beforehand.
    pub fn take_guess(&mut self, letter: char) -> GuessOutcome {
        if !self.guesses.insert(letter) {
            GuessOutcome::AlreadyUsed
        } else if self.word.has_letter(letter) {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        }
    }

    /// Number of guessed letters that are not in the word
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.guesses
            .iter()
            .filter(|&letter| !self.word.has_letter(letter))
            .count()
    }

    /// Remaining incorrect guesses before the game is lost, never below zero
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.incorrect_count())
    }

    /// True once every letter of the word has been guessed
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.word.chars().all(|letter| self.guesses.contains(letter))
    }

    /// How much of the figure to draw (0-9)
    #[must_use]
    pub fn stage(&self) -> usize {
        self.incorrect_count().min(MAX_STAGE)
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.check_win() {
            GameState::Won
        } else if self.guesses_left() == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guesses.contains(letter)
    }

    /// Clear all guesses, optionally switching to a new word
    pub fn reset(&mut self, word: Option<TargetWord>) {
        self.guesses.clear();
        if let Some(word) = word {
            self.word = word;
        }
    }
}
