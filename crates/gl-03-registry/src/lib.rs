//! # gl-03-registry
//!
//! Carbon credit ledger for Green Ledger.
//!
//! ## Architecture
//!
//! ```text
//! RegistryApi ──► RegistryService ──► LedgerStore ──► reduce(state, action)
//!                       │                  │
//!                       ▼                  ▼
//!              VerificationApi       StateStorage ("green_ledger_state")
//!              (gl-01)               ├── InMemoryStorage
//!                                    └── FileStorage
//! ```
//!
//! All state lives in one [`AppState`] value. Operations validate against
//! the current state, emit [`Action`]s, and the store reduces and persists
//! them in one step under its lock. On startup the persisted document is
//! hydrated and the seeded sample project repaired if needed.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

// Re-export main types
pub use adapters::{FileStorage, InMemoryStorage};
pub use domain::{
    hydrate, initial_state, reduce, Action, AppState, DashboardStats, NewProject, RegistryError,
    RegistryResult, RetirementReceipt, StorageError, StorageResult, TradeReceipt,
    SAMPLE_PROJECT_ID, STATE_KEY,
};
pub use ports::{RegistryApi, SharedStorage, StateStorage, SystemTimeSource, TimeSource};
pub use service::{generate_tx_hash, RegistryService};
pub use store::LedgerStore;
