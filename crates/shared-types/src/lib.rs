//! # Shared Types Crate
//!
//! This crate contains the ledger entities exchanged between the verification
//! engine, the registry, the HTTP gateway and persisted storage.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Stable Wire Format**: Field names serialize in camelCase and enum
//!   variants in kebab-case so a persisted ledger snapshot stays readable by
//!   every subsystem.
//! - **No Behaviour**: Scoring, consensus and hashing live in
//!   `gl-01-verification`; state transitions live in `gl-03-registry`.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
