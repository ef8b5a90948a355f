//! Centred frame rendering
//!
//! A `Screen` writes every line centred to a fixed width captured at startup.

use super::formatters::{alphabet_rows, border_line, centre_align, hangman_rows, word_display};
use crate::core::GameSession;
use colored::{Color, Colorize};
use std::io::{self, Write};

/// Line-oriented renderer for the game board
pub struct Screen<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> Screen<W> {
    #[must_use]
    pub const fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Consume the screen, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print one centred line, optionally framed by borders above and below
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_message(
        &mut self,
        text: &str,
        top_border: bool,
        bottom_border: bool,
    ) -> io::Result<()> {
        if top_border {
            self.print_border()?;
        }
        writeln!(self.out, "{}", centre_align(text, self.width))?;
        if bottom_border {
            self.print_border()?;
        }
        Ok(())
    }

    /// Print a framed, coloured banner
    ///
    /// Colour is applied after centring so escape codes do not skew the padding.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_banner(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.print_border()?;
        writeln!(
            self.out,
            "{}",
            centre_align(text, self.width).color(color).bold()
        )?;
        self.print_border()
    }

    /// Print the figure for the session's current stage
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_hangman(&mut self, session: &GameSession) -> io::Result<()> {
        for (i, row) in hangman_rows(session.stage()).iter().enumerate() {
            self.print_message(row, i == 0, false)?;
        }
        Ok(())
    }

    /// Print the available-letters panel
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_remaining_letters(&mut self, session: &GameSession) -> io::Result<()> {
        self.print_message("AVAILABLE LETTERS", true, true)?;

        let [first, second] = alphabet_rows(session);
        self.print_message(&first, false, false)?;
        self.print_message(&second, false, true)
    }

    /// Print the partially revealed word
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_word(&mut self, session: &GameSession) -> io::Result<()> {
        self.print_message(&word_display(session), false, true)
    }

    /// Print an uncentred prompt and flush so it shows before input is read
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the output fails.
    pub fn print_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }

    fn print_border(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", centre_align(&border_line(self.width), self.width))
    }
}
