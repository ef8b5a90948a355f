//! Terminal capabilities
//!
//! The game only needs two things from the terminal: its width, captured once,
//! and a way to clear the screen between frames.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};
use log::{debug, warn};
use std::io::{self, Write};

/// Width used when the terminal size cannot be queried
pub const DEFAULT_WIDTH: usize = 80;

/// Screen control used by the game loop
pub trait Terminal {
    /// Column count used to centre output
    fn width(&self) -> usize;

    /// Clear the screen and move the cursor to the top-left corner
    ///
    /// # Errors
    ///
    /// Returns an error if the clear sequence cannot be written.
    fn clear(&mut self) -> io::Result<()>;
}

/// Terminal backed by crossterm on the process's standard output
#[derive(Debug, Clone, Copy)]
pub struct CrosstermTerminal {
    width: usize,
}

impl CrosstermTerminal {
    /// Query the terminal width once, falling back to [`DEFAULT_WIDTH`]
    #[must_use]
    pub fn detect() -> Self {
        let width = match terminal::size() {
            Ok((0, _)) => {
                warn!("Terminal reported zero columns, using {DEFAULT_WIDTH}");
                DEFAULT_WIDTH
            }
            Ok((cols, rows)) => {
                debug!("Detected terminal size {cols}x{rows}");
                usize::from(cols)
            }
            Err(err) => {
                warn!("Could not query terminal size ({err}), using {DEFAULT_WIDTH}");
                DEFAULT_WIDTH
            }
        };

        Self { width }
    }

    /// Use a fixed width instead of querying the terminal
    #[must_use]
    pub const fn with_width(width: usize) -> Self {
        Self { width }
    }
}

impl Terminal for CrosstermTerminal {
    fn width(&self) -> usize {
        self.width
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        stdout.flush()
    }
}

/// Fixed-size terminal that only counts clears, for driving the game without a tty
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessTerminal {
    width: usize,
    clears: usize,
}

impl HeadlessTerminal {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width, clears: 0 }
    }

    /// Number of times the screen was cleared
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }
}

impl Terminal for HeadlessTerminal {
    fn width(&self) -> usize {
        self.width
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_is_reported() {
        assert_eq!(CrosstermTerminal::with_width(42).width(), 42);
    }

    #[test]
    fn detect_always_yields_usable_width() {
        // Under a test harness stdout is usually not a tty, so this exercises the fallback
        assert!(CrosstermTerminal::detect().width() > 0);
    }

    #[test]
    fn headless_counts_clears() {
        let mut term = HeadlessTerminal::new(60);
        term.clear().unwrap();
        term.clear().unwrap();
        assert_eq!(term.width(), 60);
        assert_eq!(term.clears(), 2);
    }
}
