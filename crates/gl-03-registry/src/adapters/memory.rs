use crate::domain::StorageResult;
use crate::ports::StateStorage;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory storage for tests and ephemeral nodes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.data.write().insert(key.to_string(), value.to_string());
        storage
    }
}

impl StateStorage for InMemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
