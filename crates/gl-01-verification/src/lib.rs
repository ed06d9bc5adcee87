//! # gl-01-verification
//!
//! Deterministic verification subsystem for Green Ledger.
//!
//! ## Architecture
//!
//! Three pure steps turn a project record into a verifiable outcome:
//!
//! ```text
//! Project(id, claimed) ──► Agent Score Generator ──► [Baseline, Satellite, Anomaly]
//!                                                          │
//!                                                          ▼
//!                                                 Consensus Calculator
//!                                                          │
//!                                                          ▼
//!                                            Attestation Hash ("0xattestation_…")
//! ```
//!
//! ### Determinism
//!
//! Agent scores come from a seeded trigonometric generator keyed on the
//! project id, so the same id and claimed reduction always produce the same
//! agents, the same consensus and the same attestation hash. The replay
//! operation relies on this to detect tampering with a stored record.
//!
//! This generator is unrelated to the non-seeded RNG of the mock MRV
//! pipeline (`gl-02-mrv-pipeline`). Both stand in for the same "agent"
//! concept and are intentionally not unified.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gl_01_verification::{VerificationApi, VerificationService};
//!
//! let service = VerificationService::new();
//! let outcome = service.verify(&project)?;
//! let replay = service.replay(&verified_project)?;
//! assert!(replay.matches);
//! ```

pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types
pub use domain::{
    attestation_hash, calculate_consensus, generate_agent_outputs, mint_tx_hash, AgentRole,
    AttestationInput, ConsensusOutcome, VerificationError, VerificationResult,
};
pub use ports::{ReplayOutcome, VerificationApi, VerificationOutcome};
pub use service::VerificationService;
