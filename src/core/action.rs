//! Actions accepted by the session reducer

use super::{SessionData, Theme};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Everything that can happen to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Begin loading (only honoured while idle)
    Init,
    /// Loading finished; merge reconciled data
    Ready(SessionData),
    /// Player tried a value; anything outside the alphabet is ignored
    Guess(char),
    /// The winning guess has been seen; close the window
    Success,
    /// Switch presentation theme
    Theme(Theme),
}

/// Errors decoding an action from its JSON form
#[derive(Debug, Error)]
pub enum ActionError {
    /// The action type is not one the reducer knows; a programming error on the sender's side
    #[error("Action type {0} not recognised")]
    InvalidAction(String),
    #[error("action has no \"type\" field")]
    MissingType,
    #[error("malformed {kind} action: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON shape: `{"type": "guess", "guess": "a"}`, `{"type": "ready", "data": {...}}`
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireAction {
    Init,
    Ready { data: SessionData },
    Guess { guess: char },
    Success,
    Theme { theme: Theme },
}

impl From<WireAction> for Action {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::Init => Self::Init,
            WireAction::Ready { data } => Self::Ready(data),
            WireAction::Guess { guess } => Self::Guess(guess),
            WireAction::Success => Self::Success,
            WireAction::Theme { theme } => Self::Theme(theme),
        }
    }
}

impl Action {
    const KINDS: [&'static str; 5] = ["init", "ready", "guess", "success", "theme"];

    /// Decode an action from JSON
    ///
    /// # Errors
    /// - `ActionError::InvalidAction` if `type` names an unknown action
    /// - `ActionError::MissingType` if there is no string `type` field
    /// - `ActionError::Malformed` if the text is not JSON or a known action has a bad payload
    ///
    /// # Examples
    /// ```
    /// use letterle::core::{Action, ActionError};
    ///
    /// let action = Action::from_json(r#"{"type":"guess","guess":"q"}"#).unwrap();
    /// assert_eq!(action, Action::Guess('q'));
    ///
    /// let err = Action::from_json(r#"{"type":"tutorial"}"#).unwrap_err();
    /// assert!(matches!(err, ActionError::InvalidAction(kind) if kind == "tutorial"));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ActionError> {
        let value: Value = serde_json::from_str(text).map_err(|source| ActionError::Malformed {
            kind: "unknown".to_string(),
            source,
        })?;

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ActionError::MissingType)?
            .to_string();

        if !Self::KINDS.contains(&kind.as_str()) {
            return Err(ActionError::InvalidAction(kind));
        }

        serde_json::from_value::<WireAction>(value)
            .map(Self::from)
            .map_err(|source| ActionError::Malformed { kind, source })
    }

    /// Lower-case action name, as used in the JSON `type` field
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Ready(_) => "ready",
            Self::Guess(_) => "guess",
            Self::Success => "success",
            Self::Theme(_) => "theme",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess(c) => write!(f, "guess({c})"),
            Self::Theme(theme) => write!(f, "theme({theme})"),
            other => write!(f, "{}", other.kind()),
        }
    }
}
