//! In-memory storage for tests and throwaway sessions

use super::{Storage, StorageError};
use rustc_hash::FxHashMap;

/// Storage that lives only as long as the value
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one record
    #[must_use]
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of `set` calls seen so far
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
