//! Simple CLI mode (line-oriented play without the TUI)

use super::guess::{GuessOutcome, guess_letter};
use super::share::share_to;
use super::stats::stats_report;
use super::theme::apply_theme;
use crate::clock::Clock;
use crate::core::Feedback;
use crate::game::GameStore;
use crate::output::{Osc52Sink, print_board, print_guess_result, print_statistics, print_status};
use crate::storage::Storage;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    Quit,
    Theme,
    Stats,
    Share,
    Help,
    Guess(String),
}

impl SimpleInput {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            // Single letters are always guesses
            "quit" | "exit" => Self::Quit,
            "theme" => Self::Theme,
            "stats" => Self::Stats,
            "share" => Self::Share,
            "help" | "?" => Self::Help,
            other => Self::Guess(other.to_string()),
        }
    }
}

fn print_help() {
    println!("{}", "How to play".bright_cyan().bold());
    println!("  Find the hidden letter in as few guesses as possible.");
    println!("  Letters within two places of it are marked close.");
    println!("  Commands: theme, stats, share, quit\n");
}

/// Run simple interactive mode
///
/// # Errors
/// Returns an error if reading input, persisting the session, or exporting fails.
pub fn run_simple<S: Storage, C: Clock, R: Rng>(store: &mut GameStore<S, C, R>) -> Result<()> {
    println!("\n{}", "═".repeat(44).bright_cyan());
    println!(
        " {} ",
        store.config().title.to_uppercase().bright_cyan().bold()
    );
    println!("{}", "═".repeat(44).bright_cyan());

    if store.is_first_run() {
        print_help();
    }
    print_board(&store.board());
    print_status(store.session());

    loop {
        let input = get_user_input("Guess a letter (or command)")?;
        let Some(input) = input else {
            println!("\n👋 See you tomorrow!\n");
            return Ok(());
        };

        match SimpleInput::parse(&input) {
            SimpleInput::Quit => {
                println!("\n👋 See you tomorrow!\n");
                return Ok(());
            }
            SimpleInput::Help => print_help(),
            SimpleInput::Theme => {
                let theme = apply_theme(store, None)?;
                println!("Theme: {theme}");
            }
            SimpleInput::Stats => {
                let report = stats_report(store);
                print_statistics(&report.statistics, report.countdown.as_deref());
            }
            SimpleInput::Share => {
                // Failure is reported, never fatal
                match share_to(store, &mut Osc52Sink::stdout()) {
                    Ok(destination) => println!("✓ Copied results to {destination}"),
                    Err(e) => println!("❌ {e:#}"),
                }
            }
            SimpleInput::Guess(text) => match guess_letter(store, &text)? {
                GuessOutcome::Miss { letter, feedback } => {
                    print_board(&store.board());
                    print_guess_result(letter, feedback, store.session());
                }
                GuessOutcome::Found { letter, .. } => {
                    print_board(&store.board());
                    print_guess_result(letter, Feedback::Correct, store.session());
                    print_status(store.session());
                    let report = stats_report(store);
                    print_statistics(&report.statistics, report.countdown.as_deref());
                }
                GuessOutcome::AlreadyGuessed(letter) => {
                    println!("You already looked at {}", letter.to_string().bold());
                }
                GuessOutcome::Invalid(e) => println!("❌ {e}"),
                GuessOutcome::Closed => print_status(store.session()),
            },
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
