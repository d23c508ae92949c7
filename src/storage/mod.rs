//! Persistence adapter
//!
//! The game keeps one serialized record under a single key. Storage backends
//! only move strings; parsing and validation live with the session type.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;
use thiserror::Error;

/// Key the session record is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "localData";

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("failed to serialize session record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value store holding serialized records
///
/// Reads and writes are synchronous. An absent key is `Ok(None)`, not an error.
pub trait Storage {
    /// Human-readable name for logging
    fn name(&self) -> &str;

    /// Fetch the record stored under `key`
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the record stored under `key`
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
