//! Share command: send the summary to an export sink

use crate::clock::Clock;
use crate::game::GameStore;
use crate::output::ExportSink;
use crate::storage::Storage;
use anyhow::{Context, Result};
use rand::Rng;

/// Export the share text, returning where it went
///
/// # Errors
/// Returns an error if the sink fails; the session is never affected.
pub fn share_to<S: Storage, C: Clock, R: Rng, E: ExportSink + ?Sized>(
    store: &GameStore<S, C, R>,
    sink: &mut E,
) -> Result<String> {
    let text = store.share_text();
    let destination = sink.describe();
    if let Err(e) = sink.export(&text) {
        log::warn!("share to {destination} failed: {e}");
        return Err(e).with_context(|| format!("could not share to {destination}"));
    }
    Ok(destination)
}
