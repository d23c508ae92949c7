//! Raw action dispatch

use crate::clock::Clock;
use crate::core::Action;
use crate::game::{GameError, GameStore};
use crate::storage::Storage;
use rand::Rng;

/// Decode and dispatch one JSON action, returning what was applied
///
/// # Errors
/// Unknown or malformed actions are returned as `GameError::Action` before
/// anything is dispatched.
pub fn dispatch_raw<S: Storage, C: Clock, R: Rng>(
    store: &mut GameStore<S, C, R>,
    json: &str,
) -> Result<Action, GameError> {
    let action = Action::from_json(json)?;
    store.dispatch(action.clone())?;
    Ok(action)
}
