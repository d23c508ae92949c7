//! The session: all mutable game state for the current and past windows

use super::Letter;
use crate::clock::end_of_day;
use chrono::{DateTime, FixedOffset};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a session
///
/// Within one window the status only moves forward:
/// `Idle -> Loading -> Loaded -> Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Loading,
    Loaded,
    Complete,
}

/// Presentation preference; persisted but never consulted by game logic
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Full game state
///
/// Serialized as-is into the persisted record. Field names follow the
/// record format (`expiresAt`), and `expires` is still accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub status: Status,
    pub answer: Letter,
    #[serde(alias = "expires")]
    pub expires_at: DateTime<FixedOffset>,
    pub attempts: u32,
    pub options: Vec<Letter>,
    pub history: Vec<u32>,
    #[serde(default)]
    pub theme: Theme,
}

/// Data merged into the session by the `ready` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub answer: Letter,
    #[serde(alias = "expires")]
    pub expires_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub options: Vec<Letter>,
    #[serde(default)]
    pub history: Vec<u32>,
    /// `None` keeps whatever theme the session already has
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl Session {
    /// Build an idle session for a window that ends with `expires_at`
    #[must_use]
    pub const fn new(answer: Letter, expires_at: DateTime<FixedOffset>) -> Self {
        Self {
            status: Status::Idle,
            answer,
            expires_at,
            attempts: 0,
            options: Vec::new(),
            history: Vec::new(),
            theme: Theme::Light,
        }
    }

    /// Start a brand-new window: random answer, expiring at the end of `now`'s day
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<FixedOffset>) -> Self {
        Self::new(Letter::random(rng), end_of_day(now))
    }

    /// Parse a persisted record without checking its invariants
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text)
            .map_err(|err| log::warn!("discarding unparseable session record: {err}"))
            .ok()
    }

    /// Parse a persisted record
    ///
    /// Returns `None` when the text is not a valid record, including records
    /// that parse but violate the `options`/`attempts` invariants.
    #[must_use]
    pub fn decode(text: &str) -> Option<Self> {
        let session = Self::parse(text)?;
        if session.is_consistent() {
            Some(session)
        } else {
            log::warn!(
                "discarding inconsistent session record ({} attempts, {} options)",
                session.attempts,
                session.options.len()
            );
            None
        }
    }

    /// Serialize into the persisted record format
    ///
    /// # Errors
    /// Returns an error only if serialization itself fails.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Whether `attempts` matches `options` and no option repeats
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let no_duplicates = self
            .options
            .iter()
            .enumerate()
            .all(|(i, letter)| !self.options[..i].contains(letter));
        no_duplicates && self.attempts as usize == self.options.len()
    }

    /// Snapshot as a `ready` payload
    #[must_use]
    pub fn to_data(&self) -> SessionData {
        SessionData {
            answer: self.answer,
            expires_at: self.expires_at,
            attempts: self.attempts,
            options: self.options.clone(),
            history: self.history.clone(),
            theme: Some(self.theme),
        }
    }

    #[must_use]
    pub fn latest_guess(&self) -> Option<Letter> {
        self.options.last().copied()
    }

    /// `loaded` with the answer as the most recent guess: the window is won
    /// but `success` has not been applied yet
    #[must_use]
    pub fn awaiting_success(&self) -> bool {
        self.status == Status::Loaded && self.latest_guess() == Some(self.answer)
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.options.contains(&letter)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }
}

impl SessionData {
    /// A fresh window that keeps the given history
    pub fn fresh<R: Rng + ?Sized>(
        rng: &mut R,
        now: DateTime<FixedOffset>,
        history: Vec<u32>,
    ) -> Self {
        Self {
            answer: Letter::random(rng),
            expires_at: end_of_day(now),
            attempts: 0,
            options: Vec::new(),
            history,
            theme: None,
        }
    }
}
