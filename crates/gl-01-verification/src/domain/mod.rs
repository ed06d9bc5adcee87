//! Domain layer for the Verification subsystem
//!
//! - agents: seeded agent score generator
//! - consensus: weighted consensus and status policy
//! - attestation: deterministic attestation hash
//! - format: number rendering for payloads and reasons
//! - rounding: half-up rounding helpers

mod agents;
mod attestation;
mod consensus;
mod error;
mod format;
mod rounding;

pub use agents::*;
pub use attestation::*;
pub use consensus::*;
pub use error::*;
pub use format::*;
pub use rounding::*;
