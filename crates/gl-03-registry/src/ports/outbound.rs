//! Driven ports (Outbound SPI)

use crate::domain::StorageResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// String key-value persistence for the ledger state.
pub trait StateStorage: Send + Sync {
    /// Value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: StateStorage + ?Sized> StateStorage for Arc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// Shared, type-erased storage handle.
pub type SharedStorage = Arc<dyn StateStorage>;

/// Time source abstraction (for testing)
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Default time source using system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
