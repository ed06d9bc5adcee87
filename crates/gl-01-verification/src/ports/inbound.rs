//! Driving ports (Inbound API)

use crate::domain::{ConsensusOutcome, VerificationResult};
use serde::{Deserialize, Serialize};
use shared_types::{AgentResult, Project};

/// Everything a verification run produces for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub agent_results: Vec<AgentResult>,
    pub consensus: ConsensusOutcome,
    pub attestation_hash: String,
    /// Absent when the consensus froze or rejected the project.
    pub mint_tx_hash: Option<String>,
}

/// Result of recomputing a stored attestation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayOutcome {
    pub matches: bool,
    pub computed_hash: String,
    pub stored_hash: Option<String>,
}

/// Primary Verification API
pub trait VerificationApi: Send + Sync {
    /// Run agents, consensus and attestation for a project.
    fn verify(&self, project: &Project) -> VerificationResult<VerificationOutcome>;

    /// Recompute the attestation of a verified project and compare it with
    /// the stored one.
    ///
    /// Fails with `NotVerified` when the project has no agent results.
    fn replay(&self, project: &Project) -> VerificationResult<ReplayOutcome>;
}
