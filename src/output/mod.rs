//! Terminal output formatting
//!
//! Centred text-art rendering of the game board.

pub mod display;
pub mod formatters;

pub use display::Screen;
