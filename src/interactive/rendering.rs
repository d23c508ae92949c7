//! TUI rendering with ratatui
//!
//! Board, stats and how-to-play panels for the game interface.

use super::app::{App, MessageStyle};
use crate::alphabet::{ALPHABET_SIZE, keyboard_rows};
use crate::clock::Clock;
use crate::core::{Feedback, Letter, Status, Theme};
use crate::output::formatters::{distribution_bar, feedback_hint};
use crate::stats::display_value;
use crate::storage::Storage;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Foreground and background for the whole screen
const fn palette(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Light => (Color::Black, Color::White),
        Theme::Dark => (Color::White, Color::Black),
    }
}

fn key_style(feedback: Feedback, theme: Theme) -> Style {
    let (fg, bg) = palette(theme);
    match feedback {
        Feedback::Unguessed => Style::default().fg(fg).bg(bg),
        Feedback::Far => Style::default().fg(Color::White).bg(Color::DarkGray),
        Feedback::Close => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Feedback::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn key_span(letter: Letter, feedback: Feedback, theme: Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.as_char().to_ascii_uppercase()),
        key_style(feedback, theme),
    )
}

/// Main UI rendering function
pub fn ui<S: Storage, C: Clock, R: Rng>(f: &mut Frame, app: &App<S, C, R>) {
    let theme = app.store.session().theme;
    let (fg, bg) = palette(theme);
    f.render_widget(
        Block::default().style(Style::default().fg(fg).bg(bg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);

    if app.show_tutorial {
        render_tutorial(f, theme, app.store.config().range_threshold, main_chunks[1]);
    } else if app.show_stats {
        render_stats(f, app, main_chunks[1]);
    } else {
        render_messages(f, app, main_chunks[1]);
    }

    render_status(f, app, chunks[2]);
}

fn render_header<S: Storage, C: Clock, R: Rng>(f: &mut Frame, app: &App<S, C, R>, area: Rect) {
    let header = Paragraph::new(format!("🔍 {}", app.store.config().title.to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel<S: Storage, C: Clock, R: Rng>(
    f: &mut Frame,
    app: &App<S, C, R>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
}

fn render_board<S: Storage, C: Clock, R: Rng>(f: &mut Frame, app: &App<S, C, R>, area: Rect) {
    let session = app.store.session();
    let board = app.store.board();

    let mut lines = vec![Line::from("")];
    for row in keyboard_rows(&board) {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for &(letter, feedback) in row {
            spans.push(key_span(letter, feedback, session.theme));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let title = match session.status {
        Status::Complete => " Found! ",
        Status::Loaded => " Where am I? ",
        Status::Idle | Status::Loading => " Loading.... ",
    };
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_search_progress<S: Storage, C: Clock, R: Rng>(
    f: &mut Frame,
    app: &App<S, C, R>,
    area: Rect,
) {
    let attempts = app.store.session().attempts;
    let searched = (attempts as usize).min(ALPHABET_SIZE);
    let percent = u16::try_from(searched * 100 / ALPHABET_SIZE).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Searched ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{attempts}/{ALPHABET_SIZE} letters"));

    f.render_widget(gauge, area);
}

fn render_tutorial(f: &mut Frame, theme: Theme, range: usize, area: Rect) {
    let mut content = vec![
        Line::from("Find the hidden letter in as few"),
        Line::from("guesses as possible. A new letter"),
        Line::from("hides every day at midnight."),
        Line::from(""),
    ];
    let examples = [
        Feedback::Unguessed,
        Feedback::Far,
        Feedback::Close,
        Feedback::Correct,
    ];
    for (letter, feedback) in Letter::all().zip(examples) {
        content.push(Line::from(vec![
            Span::raw("  "),
            key_span(letter, feedback, theme),
            Span::raw(format!("  {}", feedback_hint(feedback))),
        ]));
    }
    content.push(Line::from(""));
    content.push(Line::from(format!(
        "Close means within {range} letters of me."
    )));

    let tutorial = Paragraph::new(content)
        .block(
            Block::default()
                .title(" How to play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(tutorial, area);
}

fn render_stats<S: Storage, C: Clock, R: Rng>(f: &mut Frame, app: &App<S, C, R>, area: Rect) {
    let stats = app.store.statistics();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Total attempts  "),
            Span::styled(stats.played.to_string(), bold),
        ]),
        Line::from(vec![
            Span::raw("Today           "),
            Span::styled(stats.today.to_string(), bold),
        ]),
        Line::from(vec![
            Span::raw("Average         "),
            Span::styled(display_value(stats.average), bold.fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Best            "),
            Span::styled(display_value(stats.best), bold.fg(Color::Green)),
        ]),
        Line::from(""),
    ];

    let max_bucket = stats.max_bucket();
    for &(attempts, count) in &stats.distribution {
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts:>2} ")),
            Span::styled(
                distribution_bar(count, max_bucket, 16),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(match app.store.countdown() {
        Some(remaining) => Line::from(vec![
            Span::raw("Next available  "),
            Span::styled(remaining, bold.fg(Color::Cyan)),
        ]),
        None => Line::from("And like that... he's gone! (Refresh to start over)"),
    });

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Statistics ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn render_messages<S: Storage, C: Clock, R: Rng>(f: &mut Frame, app: &App<S, C, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default(),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: Storage, C: Clock, R: Rng>(f: &mut Frame, app: &App<S, C, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let session = app.store.session();
    let attempts = Paragraph::new(format!("Attempts: {}", session.attempts))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let theme = Paragraph::new(format!("Theme: {}", session.theme)).alignment(Alignment::Center);
    f.render_widget(theme, chunks[1]);

    let help_text = if session.is_complete() {
        "Esc: Quit | Enter: Stats | Ctrl-S: Share | Tab: Theme | ?: Help"
    } else {
        "Esc: Quit | A-Z: Guess | Tab: Theme | ?: Help"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
