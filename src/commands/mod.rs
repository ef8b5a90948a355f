//! Command implementations

pub mod play;

pub use play::{Pacing, PlayConfig, run_play};
