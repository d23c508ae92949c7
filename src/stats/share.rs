//! Shareable plain-text summary of a window

use super::{average, best, display_value};
use crate::alphabet::{ALPHABET_SIZE, keyboard_rows};
use crate::config::GameConfig;
use crate::core::{Feedback, Letter, Theme};

/// Text fixed by configuration rather than by game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    pub title: String,
    pub site: String,
    pub range_threshold: usize,
}

impl From<&GameConfig> for ShareConfig {
    fn from(config: &GameConfig) -> Self {
        Self {
            title: config.title.clone(),
            site: config.site.clone(),
            range_threshold: config.range_threshold,
        }
    }
}

/// Format the share summary
///
/// Layout: a title line (window number and attempts out of the alphabet
/// size), a stats line, the site link, then the board as three keyboard rows
/// of glyphs. The output is deterministic for the same inputs.
///
/// # Examples
/// ```
/// use letterle::core::{Letter, Theme};
/// use letterle::stats::{ShareConfig, share_text};
///
/// let config = ShareConfig {
///     title: "Find Phunk".into(),
///     site: "https://example.com".into(),
///     range_threshold: 2,
/// };
/// let answer = Letter::new('q').unwrap();
/// let text = share_text(&[answer], answer, &[1], 1, Theme::Dark, &config);
/// assert!(text.starts_with("Find Phunk  #1  1/26\n"));
/// ```
#[must_use]
pub fn share_text(
    options: &[Letter],
    answer: Letter,
    history: &[u32],
    attempts: u32,
    theme: Theme,
    config: &ShareConfig,
) -> String {
    let glyphs: Vec<String> = Letter::keyboard()
        .map(|letter| {
            Feedback::classify(letter, answer, options, config.range_threshold)
                .glyph(theme)
                .to_string()
        })
        .collect();
    let [top, middle, bottom] = keyboard_rows(&glyphs);

    let title = format!(
        "{}  #{}  {attempts}/{ALPHABET_SIZE}",
        config.title,
        history.len()
    );
    let stats = format!(
        "Average ({})  |  Personal Best ({})",
        display_value(average(history)),
        display_value(best(history))
    );

    format!(
        "{title}\n{stats}\n{}\n\n{}\n{}\n{}\n\n",
        config.site,
        top.join(" "),
        middle.join(" "),
        bottom.join(" ")
    )
}
