//! Interactive game loop
//!
//! Reads one token per turn, feeds its first letter to the session and
//! redraws the whole board after every guess.

use crate::core::{GameSession, GameState, GuessOutcome, letter_from_token};
use crate::output::Screen;
use crate::terminal::Terminal;
use anyhow::Result;
use colored::Color;
use log::{debug, info};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const TITLE: &str = "Welcome to Hangman!";
const SUBTITLE: &str = "Guess the hidden word, one letter at a time.";
const GUESS_PROMPT: &str = "Guess the Word!";
const DUPLICATE_NOTICE: &str = "Oops! You've already used this letter!";
const WIN_BANNER: &str = "HOLY MOLY, YOU WON!";
const LOSS_BANNER: &str = "OH NOES! YOU LOST, GOOD LUCK NEXT TIME! :(";

/// Cosmetic delays between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after the welcome banner
    pub startup: Duration,
    /// Pause after the already-used notice so it can be read before the redraw
    pub duplicate: Duration,
}

impl Pacing {
    /// No delays at all
    #[must_use]
    pub const fn none() -> Self {
        Self {
            startup: Duration::ZERO,
            duplicate: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            startup: Duration::from_millis(1000),
            duplicate: Duration::from_millis(750),
        }
    }
}

/// Options for a play session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    pub pacing: Pacing,
    /// Offer another round with the same word after each game
    pub replay: bool,
}

/// Whitespace-delimited token reader over line-buffered input
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    const fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed; `None` at end of input
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Read one raw line, replacing invalid UTF-8 rather than failing on it
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Wait for the rest of the current line, or a fresh line if nothing is pending
    fn acknowledge(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            self.read_line()?;
        }
        self.pending.clear();
        Ok(())
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

/// Run the interactive game until it is won, lost or input runs out
///
/// Returns the state of the last round played. `GameState::InProgress` means
/// input ended before the game was decided.
///
/// # Errors
///
/// Returns an error if reading input, writing output or clearing the terminal fails.
pub fn run_play<R, W, T>(
    session: &mut GameSession,
    input: R,
    output: W,
    terminal: &mut T,
    config: &PlayConfig,
) -> Result<GameState>
where
    R: BufRead,
    W: Write,
    T: Terminal,
{
    let mut screen = Screen::new(output, terminal.width());
    let mut reader = TokenReader::new(input);

    info!(
        "Starting game: {} letters, width {}",
        session.word().chars().count(),
        screen.width()
    );

    screen.print_message(TITLE, true, false)?;
    screen.print_message(SUBTITLE, false, false)?;
    pause(config.pacing.startup);

    loop {
        let state = play_round(session, &mut reader, &mut screen, terminal, config.pacing)?;
        if !state.is_over() {
            info!("Input closed before the game ended");
            return Ok(state);
        }

        show_result(session, state, &mut screen, terminal)?;
        reader.discard_pending();

        if config.replay {
            screen.print_prompt("Play again? (yes/no): ")?;
            let again = reader
                .next_token()?
                .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y"));
            if again {
                info!("Starting a new round");
                session.reset(None);
                continue;
            }
        } else {
            screen.print_prompt("Press Enter to exit...")?;
            reader.acknowledge()?;
        }

        return Ok(state);
    }
}

fn play_round<R, W, T>(
    session: &mut GameSession,
    reader: &mut TokenReader<R>,
    screen: &mut Screen<W>,
    terminal: &mut T,
    pacing: Pacing,
) -> Result<GameState>
where
    R: BufRead,
    W: Write,
    T: Terminal,
{
    while session.state() == GameState::InProgress {
        terminal.clear()?;
        print_board(session, screen)?;
        screen.print_message(GUESS_PROMPT, true, false)?;
        screen.print_prompt(">>")?;

        let Some(token) = reader.next_token()? else {
            return Ok(GameState::InProgress);
        };
        let Some(letter) = letter_from_token(&token) else {
            continue;
        };

        match session.take_guess(letter) {
            GuessOutcome::AlreadyUsed => {
                screen.print_message(DUPLICATE_NOTICE, false, false)?;
                pause(pacing.duplicate);
            }
            outcome => debug!(
                "Guess {letter}: {outcome:?}, {} attempts left",
                session.guesses_left()
            ),
        }
    }

    Ok(session.state())
}

fn show_result<W: Write, T: Terminal>(
    session: &GameSession,
    state: GameState,
    screen: &mut Screen<W>,
    terminal: &mut T,
) -> Result<()> {
    terminal.clear()?;
    print_board(session, screen)?;

    if state == GameState::Won {
        info!("Game won with {} attempts left", session.guesses_left());
        screen.print_banner(WIN_BANNER, Color::Green)?;
    } else {
        info!("Game lost, word was {}", session.word());
        screen.print_banner(LOSS_BANNER, Color::Red)?;
        screen.print_message(&format!("The word was {}", session.word()), false, true)?;
    }

    Ok(())
}

fn print_board<W: Write>(session: &GameSession, screen: &mut Screen<W>) -> io::Result<()> {
    screen.print_message(TITLE, true, false)?;
    screen.print_message(SUBTITLE, false, false)?;
    screen.print_hangman(session)?;
    screen.print_remaining_letters(session)?;
    screen.print_word(session)
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_ATTEMPTS, TargetWord};
    use crate::terminal::HeadlessTerminal;
    use std::io::Cursor;

    fn config() -> PlayConfig {
        PlayConfig {
            pacing: Pacing::none(),
            replay: false,
        }
    }

    /// Returns the session, final state, rendered output and clear count
    fn play(
        word: &str,
        input: &str,
        config: &PlayConfig,
    ) -> (GameSession, GameState, String, usize) {
        let mut session = GameSession::new(TargetWord::new(word).unwrap());
        let mut terminal = HeadlessTerminal::new(60);
        let mut output = Vec::new();
        let state = run_play(
            &mut session,
            Cursor::new(input.as_bytes()),
            &mut output,
            &mut terminal,
            config,
        )
        .unwrap();
        let text = String::from_utf8(output).unwrap();
        (session, state, text, terminal.clears())
    }

    #[test]
    fn winning_game() {
        let (session, state, output, clears) = play("cat", "c\na\nt\n\n", &config());
        assert_eq!(state, GameState::Won);
        assert!(session.check_win());
        assert!(output.contains(WIN_BANNER));
        assert!(output.contains("Press Enter to exit..."));
        // One clear per turn plus the final board
        assert_eq!(clears, 4);
    }

    #[test]
    fn board_shows_partial_word_before_last_guess() {
        let (_, _, output, _) = play("cat", "c\na\nt\n\n", &config());
        assert!(output.lines().any(|line| line.trim() == "C A _"));
    }

    #[test]
    fn tokens_on_one_line_are_separate_guesses() {
        let (session, state, _, _) = play("cat", "C A T\n\n", &config());
        assert_eq!(state, GameState::Won);
        assert_eq!(session.guesses().len(), 3);
    }

    #[test]
    fn only_first_character_of_token_counts() {
        let (session, state, _, _) = play("cat", "cow\nask\ntiger\n\n", &config());
        assert_eq!(state, GameState::Won);
        assert_eq!(session.guesses().iter().collect::<String>(), "CAT");
    }

    #[test]
    fn losing_game_reveals_word() {
        let (session, state, output, _) = play("abc", "x y z q r s t u v w\n\n", &config());
        assert_eq!(state, GameState::Lost);
        assert_eq!(session.guesses_left(), 0);
        assert!(!session.check_win());
        assert!(output.contains(LOSS_BANNER));
        assert!(output.contains("The word was ABC"));
    }

    #[test]
    fn duplicate_guess_shows_notice_without_cost() {
        let (session, state, output, _) = play("dog", "d\nd\n", &config());
        assert_eq!(state, GameState::InProgress);
        assert_eq!(session.guesses().iter().collect::<String>(), "D");
        assert_eq!(session.guesses_left(), MAX_ATTEMPTS);
        assert_eq!(output.matches(DUPLICATE_NOTICE).count(), 1);
    }

    #[test]
    fn empty_input_ends_without_verdict() {
        let (session, state, output, clears) = play("shrek", "", &config());
        assert_eq!(state, GameState::InProgress);
        assert!(session.guesses().is_empty());
        assert!(output.contains(TITLE));
        assert!(!output.contains(WIN_BANNER));
        assert!(!output.contains(LOSS_BANNER));
        assert_eq!(clears, 1);
    }

    #[test]
    fn invalid_utf8_guess_is_an_ordinary_miss() {
        let mut session = GameSession::new(TargetWord::new("cat").unwrap());
        let mut terminal = HeadlessTerminal::new(60);
        let mut output = Vec::new();
        let state = run_play(
            &mut session,
            Cursor::new(&b"c\n\xe9\na\nt\n\xff\n"[..]),
            &mut output,
            &mut terminal,
            &config(),
        )
        .unwrap();
        assert_eq!(state, GameState::Won);
        assert!(session.is_guessed(char::REPLACEMENT_CHARACTER));
        assert_eq!(session.guesses_left(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn non_alphabetic_guess_costs_an_attempt() {
        let (session, _, _, _) = play("cat", "7\n", &config());
        assert_eq!(session.guesses_left(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn extra_tokens_after_win_are_discarded() {
        let (_, state, output, _) = play("cat", "c a t x y\n\n", &config());
        assert_eq!(state, GameState::Won);
        assert!(output.contains(WIN_BANNER));
    }

    #[test]
    fn replay_resets_session() {
        let config = PlayConfig {
            pacing: Pacing::none(),
            replay: true,
        };
        let (session, state, output, _) = play("cat", "c a t\nyes\nx c a t\nno\n", &config);
        assert_eq!(state, GameState::Won);
        assert_eq!(output.matches("Play again? (yes/no)").count(), 2);
        assert_eq!(output.matches(WIN_BANNER).count(), 2);
        // Second round started from a clean slate
        assert_eq!(session.guesses().iter().collect::<String>(), "XCAT");
        assert!(!output.contains("Press Enter to exit..."));
    }

    #[test]
    fn replay_declined_on_end_of_input() {
        let config = PlayConfig {
            pacing: Pacing::none(),
            replay: true,
        };
        let (_, state, output, _) = play("cat", "c a t\n", &config);
        assert_eq!(state, GameState::Won);
        assert_eq!(output.matches("Play again? (yes/no)").count(), 1);
    }

    #[test]
    fn default_pacing_matches_game_rhythm() {
        let pacing = Pacing::default();
        assert_eq!(pacing.startup, Duration::from_millis(1000));
        assert_eq!(pacing.duplicate, Duration::from_millis(750));
        assert_eq!(Pacing::none().startup, Duration::ZERO);
    }
}
