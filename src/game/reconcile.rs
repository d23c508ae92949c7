//! Load-time reconciliation of the persisted record against the clock
//!
//! Three outcomes:
//! - no usable record: start a fresh window (first run)
//! - record from today: resume it exactly as left
//! - record from an earlier day: fresh window, history carried forward
//!
//! A record that parses but breaks the `options`/`attempts` invariants is
//! never resumed. It starts a fresh window that keeps its history.

use crate::clock::{Clock, is_same_day};
use crate::config::GameConfig;
use crate::core::{Session, SessionData, Theme};
use crate::storage::{Storage, StorageError};
use rand::Rng;
use std::fmt;

/// Which branch reconciliation took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Nothing (or nothing parseable) was stored
    FirstRun,
    /// Today's window was restored verbatim
    Resumed,
    /// The stored window had expired or was inconsistent; a new one was started
    RolledOver,
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstRun => write!(f, "first run"),
            Self::Resumed => write!(f, "resumed"),
            Self::RolledOver => write!(f, "rolled over"),
        }
    }
}

/// Reconciliation result: the `ready` payload plus how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub data: SessionData,
    pub outcome: ReconcileOutcome,
}

/// Decide whether to resume, initialise, or roll over the stored session
///
/// Fresh windows are written back to storage before returning; a resumed
/// window is left untouched.
///
/// # Errors
/// Returns an error only if storage cannot be read or written. An
/// unparseable record is treated as absent.
pub fn reconcile<S, C, R>(
    storage: &mut S,
    clock: &C,
    rng: &mut R,
    config: &GameConfig,
) -> Result<Reconciled, StorageError>
where
    S: Storage + ?Sized,
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let now = clock.now();
    let key = config.storage_key.as_str();
    let persisted = storage.get(key)?.as_deref().and_then(Session::parse);

    let Some(persisted) = persisted else {
        let mut fresh = Session::generate(rng, now);
        if config.prefers_dark {
            fresh.theme = Theme::Dark;
        }
        storage.set(key, &fresh.encode()?)?;
        log::info!(
            "no stored session in {} storage; new window until {}",
            storage.name(),
            fresh.expires_at
        );
        return Ok(Reconciled {
            data: fresh.to_data(),
            outcome: ReconcileOutcome::FirstRun,
        });
    };

    let consistent = persisted.is_consistent();
    if consistent && is_same_day(persisted.expires_at, now) {
        log::info!(
            "resuming window with {} attempts ({} completed)",
            persisted.attempts,
            persisted.history.len()
        );
        return Ok(Reconciled {
            data: persisted.to_data(),
            outcome: ReconcileOutcome::Resumed,
        });
    }

    let data = SessionData::fresh(rng, now, persisted.history);
    let mut record = Session::new(data.answer, data.expires_at);
    record.history.clone_from(&data.history);
    storage.set(key, &record.encode()?)?;
    if consistent {
        log::info!(
            "window from {} expired; new window until {}",
            persisted.expires_at,
            data.expires_at
        );
    } else {
        log::warn!(
            "replacing inconsistent window ({} attempts, {} options); keeping {} results",
            persisted.attempts,
            persisted.options.len(),
            data.history.len()
        );
    }
    Ok(Reconciled {
        data,
        outcome: ReconcileOutcome::RolledOver,
    })
}
