//! Formatting utilities for terminal output
//!
//! Pure string builders; nothing here writes to the terminal.

use crate::core::{ALPHABET, GameSession};

/// Rows of the figure for each stage, top to bottom
const FIGURE_ROWS: usize = 6;

/// Pad `text` with spaces so it sits in the middle of `width` columns
///
/// Padding alternates front and back, starting at the front, so odd padding
/// leans one column to the right. Text already at or beyond `width` is returned unchanged.
#[must_use]
pub fn centre_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let padding = width - len;
    let front = padding.div_ceil(2);
    let back = padding / 2;

    format!("{}{text}{}", " ".repeat(front), " ".repeat(back))
}

/// Horizontal border `+----+` spanning all but two columns of `width`
#[must_use]
pub fn border_line(width: usize) -> String {
    format!("+{}+", "-".repeat(width.saturating_sub(3)))
}

/// Figure rows for a stage (0 = empty gallows, 9 = complete figure)
///
/// Always returns the same number of rows so the layout does not shift.
#[must_use]
pub fn hangman_rows(stage: usize) -> [&'static str; FIGURE_ROWS] {
    let rope = if stage >= 1 { "|" } else { "" };
    let neck = if stage >= 2 { "|" } else { "" };
    let head = if stage >= 3 { "O" } else { "" };
    let arms = match stage {
        0..=3 => "",
        4 => "/  ",
        5 => "/| ",
        _ => "/|\\",
    };
    let waist = if stage >= 7 { "|" } else { "" };
    let legs = match stage {
        0..=7 => "",
        8 => "/",
        _ => "/ \\",
    };

    [rope, neck, head, arms, waist, legs]
}

/// One row of the available-letters panel
///
/// Starts with a space; each letter takes two columns, blanked out once guessed.
#[must_use]
pub fn alphabet_row(letters: &[char], session: &GameSession) -> String {
    let mut row = String::with_capacity(1 + letters.len() * 2);
    row.push(' ');

    for &letter in letters {
        if session.is_guessed(letter) {
            row.push_str("  ");
        } else {
            row.push(letter);
            row.push(' ');
        }
    }

    row
}

/// Both alphabet rows, A-M and N-Z
#[must_use]
pub fn alphabet_rows(session: &GameSession) -> [String; 2] {
    let (first, second) = ALPHABET.split_at(ALPHABET.len() / 2);
    [alphabet_row(first, session), alphabet_row(second, session)]
}

/// The word with unguessed letters hidden, e.g. `C A _`
#[must_use]
pub fn word_display(session: &GameSession) -> String {
    session
        .word()
        .chars()
        .map(|letter| if session.is_guessed(letter) { letter } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
