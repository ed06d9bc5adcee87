//! Verification Service
//!
//! Wires the pure domain steps behind the `VerificationApi` port.

use crate::domain::{
    attestation_hash, calculate_consensus, generate_agent_outputs, mint_tx_hash,
    AttestationInput, VerificationError, VerificationResult,
};
use crate::ports::{ReplayOutcome, VerificationApi, VerificationOutcome};
use shared_types::Project;
use tracing::{debug, info, warn};

/// Stateless verification engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerificationService;

impl VerificationService {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, project: &Project) -> VerificationResult<VerificationOutcome> {
        let agent_results = generate_agent_outputs(&project.id, project.claimed_reduction)?;
        let consensus = calculate_consensus(&agent_results)?;

        let agent_tons: Vec<i64> = agent_results
            .iter()
            .map(|r| r.estimated_verified_tons)
            .collect();
        let hash = attestation_hash(&AttestationInput {
            project_id: &project.id,
            claimed_reduction: project.claimed_reduction,
            agent_tons: &agent_tons,
            final_verified_tons: consensus.final_verified_tons,
        })?;

        let mint = consensus
            .status
            .allows_minting()
            .then(|| mint_tx_hash(&hash));

        Ok(VerificationOutcome {
            agent_results,
            consensus,
            attestation_hash: hash,
            mint_tx_hash: mint,
        })
    }
}

impl VerificationApi for VerificationService {
    fn verify(&self, project: &Project) -> VerificationResult<VerificationOutcome> {
        let outcome = self.run(project)?;

        info!(
            project_id = %project.id,
            status = %outcome.consensus.status,
            weighted_confidence = outcome.consensus.weighted_confidence,
            max_anomaly = outcome.consensus.max_anomaly,
            final_tons = outcome.consensus.final_verified_tons,
            "Multi-agent verification completed"
        );
        Ok(outcome)
    }

    fn replay(&self, project: &Project) -> VerificationResult<ReplayOutcome> {
        if !project.is_verified() {
            return Err(VerificationError::NotVerified(project.id.clone()));
        }

        let computed_hash = self.run(project)?.attestation_hash;
        let matches = project.attestation_hash.as_deref() == Some(computed_hash.as_str());

        if matches {
            debug!(project_id = %project.id, hash = %computed_hash, "Replay matches stored attestation");
        } else {
            warn!(
                project_id = %project.id,
                computed = %computed_hash,
                stored = ?project.attestation_hash,
                "Replayed hash does not match stored attestation"
            );
        }

        Ok(ReplayOutcome {
            matches,
            computed_hash,
            stored_hash: project.attestation_hash.clone(),
        })
    }
}
