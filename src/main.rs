//! Letterle - CLI
//!
//! Daily letter-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use letterle::{
    clock::SystemClock,
    commands::{
        GuessOutcome, apply_theme, dispatch_raw, guess_letter, run_simple, share_to, stats_report,
    },
    config::{GameConfig, detect_dark_preference},
    core::{DEFAULT_RANGE_THRESHOLD, Feedback, Theme},
    game::GameStore,
    output::{FileSink, StdoutSink, print_board, print_guess_result, print_statistics, print_status},
    storage::{DEFAULT_STORAGE_KEY, FileStorage},
};
use rand::rngs::ThreadRng;
use std::path::PathBuf;

type Store = GameStore<FileStorage, SystemClock, ThreadRng>;

#[derive(Parser)]
#[command(
    name = "letterle",
    about = "Find the hidden letter of the day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the saved session (default: platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage key the session is saved under
    #[arg(short, long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Alphabet distance that counts as close
    #[arg(short, long, global = true, default_value_t = DEFAULT_RANGE_THRESHOLD)]
    range: usize,

    /// Start new players on the dark theme
    #[arg(long, global = true)]
    dark: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, without the TUI)
    Simple,

    /// Make a single guess
    Guess {
        /// The letter to guess
        letter: String,
    },

    /// Show statistics and the time until the next letter
    Stats,

    /// Print today's share text
    Share {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Set the theme, or toggle it when none is given
    Theme {
        #[arg(value_enum)]
        mode: Option<Theme>,
    },

    /// Dispatch a raw JSON action, e.g. '{"type":"guess","guess":"q"}'
    Dispatch {
        json: String,
    },
}

fn build_config(cli: &Cli) -> GameConfig {
    GameConfig {
        storage_key: cli.key.clone(),
        range_threshold: cli.range,
        prefers_dark: cli.dark || detect_dark_preference(),
        ..GameConfig::default()
    }
}

fn open_store(cli: &Cli) -> Result<Store> {
    let storage = cli
        .data_dir
        .clone()
        .map_or_else(FileStorage::default_location, FileStorage::new);
    log::debug!("storage at {}", storage.dir().display());

    let mut store = GameStore::new(storage, SystemClock, rand::rng(), build_config(cli));
    store.start().context("failed to load saved session")?;
    Ok(store)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut store = open_store(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(store),
        Commands::Simple => run_simple(&mut store),
        Commands::Guess { letter } => run_guess_command(&mut store, &letter),
        Commands::Stats => {
            run_stats_command(&store);
            Ok(())
        }
        Commands::Share { output } => run_share_command(&store, output),
        Commands::Theme { mode } => {
            let theme = apply_theme(&mut store, mode).context("failed to save theme")?;
            println!("Theme: {}", theme.to_string().bold());
            Ok(())
        }
        Commands::Dispatch { json } => {
            let action = dispatch_raw(&mut store, &json)?;
            println!("Dispatched {action}");
            print_status(store.session());
            Ok(())
        }
    }
}

fn run_guess_command(store: &mut Store, letter: &str) -> Result<()> {
    match guess_letter(store, letter).context("failed to save guess")? {
        GuessOutcome::Miss { letter, feedback } => {
            print_board(&store.board());
            print_guess_result(letter, feedback, store.session());
        }
        GuessOutcome::Found { letter, .. } => {
            print_board(&store.board());
            print_guess_result(letter, Feedback::Correct, store.session());
            print_status(store.session());
        }
        GuessOutcome::AlreadyGuessed(letter) => {
            println!("You already looked at {}", letter.to_string().bold());
        }
        GuessOutcome::Invalid(e) => anyhow::bail!(e),
        GuessOutcome::Closed => print_status(store.session()),
    }
    Ok(())
}

fn run_stats_command(store: &Store) {
    let report = stats_report(store);
    print_status(store.session());
    print_statistics(&report.statistics, report.countdown.as_deref());
}

fn run_share_command(store: &Store, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let destination = share_to(store, &mut FileSink::new(path))?;
            println!("✓ Wrote results to {destination}");
        }
        None => {
            share_to(store, &mut StdoutSink)?;
        }
    }
    Ok(())
}

fn run_play_command(store: Store) -> Result<()> {
    use letterle::interactive::{App, run_tui};

    let app = App::new(store);
    run_tui(app)
}
