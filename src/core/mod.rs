//! Core domain types for Hangman
//!
//! This module contains the game state with no terminal or I/O dependencies.
//! Everything here is pure and testable in isolation.

mod guesses;
mod session;
mod word;

pub use guesses::GuessSet;
pub use session::{ALPHABET, GameSession, GameState, GuessOutcome, MAX_ATTEMPTS, MAX_STAGE};
pub use word::{DEFAULT_WORD, TargetWord, WordError, letter_from_token};
