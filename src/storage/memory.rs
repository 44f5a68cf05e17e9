use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::errors::TrackerError;

use super::{Result, StorageBackend};

/// In-process key-value storage. Clones share the same underlying map, so a
/// test can keep a handle and inspect what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single document.
    pub fn with_document(key: &str, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut guard) = storage.entries.lock() {
            guard.insert(key.to_string(), value.into());
        }
        storage
    }

    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| TrackerError::Storage("memory storage poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| TrackerError::Storage("memory storage poisoned".into()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
