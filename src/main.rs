//! Hangman - CLI
//!
//! Guess the hidden word one letter at a time before the figure is complete.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    commands::{Pacing, PlayConfig, run_play},
    core::{DEFAULT_WORD, GameSession, TargetWord},
    terminal::CrosstermTerminal,
};
use log::info;
use std::io;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman: ten wrong guesses and you're out",
    version,
    author
)]
struct Cli {
    /// Hidden word to play with
    #[arg(short, long, default_value = DEFAULT_WORD)]
    word: String,

    /// Render width in columns (default: detected from the terminal)
    #[arg(long)]
    width: Option<usize>,

    /// Skip the cosmetic pauses between frames
    #[arg(long)]
    no_pause: bool,

    /// Offer another round after each game
    #[arg(short, long)]
    replay: bool,
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let cli = Cli::parse();

    let word = TargetWord::new(&cli.word).context("Invalid --word")?;
    let mut terminal = cli
        .width
        .map_or_else(CrosstermTerminal::detect, CrosstermTerminal::with_width);

    let config = PlayConfig {
        pacing: if cli.no_pause {
            Pacing::none()
        } else {
            Pacing::default()
        },
        replay: cli.replay,
    };

    let mut session = GameSession::new(word);
    let state = run_play(
        &mut session,
        io::stdin().lock(),
        io::stdout(),
        &mut terminal,
        &config,
    )?;

    info!("Finished in state {state:?}");
    Ok(())
}
