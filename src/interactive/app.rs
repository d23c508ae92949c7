//! TUI application state and logic

use crate::clock::Clock;
use crate::commands::{GuessOutcome, apply_theme, guess_letter, share_to};
use crate::core::{Action, Feedback};
use crate::game::GameStore;
use crate::output::formatters::feedback_hint;
use crate::output::{ExportSink, Osc52Sink};
use crate::storage::Storage;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

/// Redraw interval, so the countdown keeps ticking without input
const TICK: Duration = Duration::from_millis(250);

/// Application state
///
/// Tutorial and stats visibility live here only; they are never persisted.
pub struct App<S, C, R> {
    pub store: GameStore<S, C, R>,
    pub messages: Vec<Message>,
    pub show_tutorial: bool,
    pub show_stats: bool,
    pub should_quit: bool,
    completed: Rc<Cell<bool>>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: Storage, C: Clock, R: Rng> App<S, C, R> {
    /// Wrap a started store
    pub fn new(mut store: GameStore<S, C, R>) -> Self {
        let completed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&completed);
        store.subscribe(move |_, action| {
            if matches!(action, Action::Success) {
                flag.set(true);
            }
        });

        let show_tutorial = store.is_first_run();
        let show_stats = store.session().is_complete();
        let mut app = Self {
            store,
            messages: Vec::new(),
            show_tutorial,
            show_stats,
            should_quit: false,
            completed,
        };

        if app.show_stats {
            app.add_message("Already found today. Come back tomorrow!", MessageStyle::Info);
        } else {
            app.add_message("Press a letter key to look for me.", MessageStyle::Info);
        }
        app
    }

    /// Submit a guess from the keyboard
    ///
    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn handle_guess(&mut self, c: char) -> Result<()> {
        match guess_letter(&mut self.store, &c.to_string())? {
            GuessOutcome::Miss { letter, feedback } => {
                let style = if feedback == Feedback::Close {
                    MessageStyle::Success
                } else {
                    MessageStyle::Info
                };
                self.add_message(
                    &format!(
                        "{}: {}",
                        letter.as_char().to_ascii_uppercase(),
                        feedback_hint(feedback)
                    ),
                    style,
                );
            }
            GuessOutcome::Found { attempts, .. } => {
                self.add_message(
                    &format!(
                        "{} Found in {attempts}!",
                        feedback_hint(Feedback::Correct)
                    ),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::AlreadyGuessed(letter) => self.add_message(
                &format!(
                    "Already looked at {}",
                    letter.as_char().to_ascii_uppercase()
                ),
                MessageStyle::Error,
            ),
            GuessOutcome::Invalid(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            GuessOutcome::Closed => {
                self.show_stats = true;
            }
        }

        if self.completed.take() {
            self.show_stats = true;
            self.show_tutorial = false;
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn toggle_theme(&mut self) -> Result<()> {
        let theme = apply_theme(&mut self.store, None)?;
        self.add_message(&format!("Theme: {theme}"), MessageStyle::Info);
        Ok(())
    }

    pub fn toggle_tutorial(&mut self) {
        self.show_tutorial = !self.show_tutorial;
    }

    /// Export the share text; failures become a message
    pub fn share_with<E: ExportSink + ?Sized>(&mut self, sink: &mut E) {
        match share_to(&self.store, sink) {
            Ok(destination) => {
                self.add_message(
                    &format!("Copied results to {destination}"),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&format!("{e:#}"), MessageStyle::Error),
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.share_with(&mut Osc52Sink::stdout()),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_theme()?,
            KeyCode::Char('?') => self.toggle_tutorial(),
            KeyCode::Enter if self.store.session().is_complete() => {
                self.show_stats = !self.show_stats;
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.handle_guess(c)?,
            _ => {}
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage, C: Clock, R: Rng>(app: App<S, C, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, C, R>(terminal: &mut Terminal<B>, mut app: App<S, C, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: Storage,
    C: Clock,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
