//! Session lifecycle: reconciliation against storage and the dispatch loop

mod reconcile;
mod store;

pub use reconcile::{ReconcileOutcome, Reconciled, reconcile};
pub use store::{GameStore, Observer};

use crate::core::ActionError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the game store
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("game has not been started")]
    NotStarted,
}
