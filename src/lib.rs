//! Hangman
//!
//! A terminal word-guessing game: reveal the hidden word one letter at a time
//! before ten wrong guesses complete the figure.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameState, TargetWord};
//!
//! let mut game = GameSession::new(TargetWord::new("cat").unwrap());
//! game.take_guess('C');
//! game.take_guess('A');
//! game.take_guess('T');
//! assert_eq!(game.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Terminal size and clearing
pub mod terminal;
