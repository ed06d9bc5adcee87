//! Ledger state and its seed contents

use serde::{Deserialize, Serialize};
use shared_types::{
    standard_verification_steps, AgentResult, AuditAction, AuditEvent, ConsensusData, Portfolio,
    Project, ProjectStatus, StepStatus, UserRole,
};

/// Storage key the whole state is persisted under.
pub const STATE_KEY: &str = "green_ledger_state";

/// Id of the seeded sample project.
pub const SAMPLE_PROJECT_ID: &str = "proj-sample-001";

/// Claimed reduction the sample project must carry; anything else is repaired.
pub const SAMPLE_CLAIMED_REDUCTION: f64 = 100.0;

const SAMPLE_NAME: &str = "Rainforest Conservation - Amazon Delta";
const SAMPLE_ATTESTATION: &str = "0x7d8e9f2a1b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e";

/// Complete registry state, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Newest first.
    pub projects: Vec<Project>,
    /// Newest first.
    #[serde(default)]
    pub audit_log: Vec<AuditEvent>,
    #[serde(default)]
    pub user_role: UserRole,
    #[serde(default)]
    pub portfolio: Portfolio,
}

impl AppState {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// State of a fresh ledger: the sample project and its verification event.
pub fn initial_state() -> AppState {
    AppState {
        projects: vec![sample_project()],
        audit_log: vec![sample_audit_event()],
        user_role: UserRole::ProjectOwner,
        portfolio: Portfolio::default(),
    }
}

pub fn sample_project() -> Project {
    let agent = |name: &str, confidence: f64, anomaly: f64, tons: i64, weight: f64| AgentResult {
        agent_name: name.to_string(),
        confidence_score: confidence,
        anomaly_score: anomaly,
        estimated_verified_tons: tons,
        weight,
    };

    Project {
        id: SAMPLE_PROJECT_ID.to_string(),
        name: SAMPLE_NAME.to_string(),
        project_type: "Reforestation".to_string(),
        location: "Brazil".to_string(),
        claimed_reduction: SAMPLE_CLAIMED_REDUCTION,
        description: "Priority reforestation project in the Amazon Delta targeting 100 tons of \
                      sequestered carbon over 5 years. This project uses IoT soil sensors and \
                      satellite imagery for baseline verification."
            .to_string(),
        status: ProjectStatus::Tradable,
        submitted_date: "2024-01-10".to_string(),
        attestation_hash: Some(SAMPLE_ATTESTATION.to_string()),
        mint_tx_hash: Some("0x4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f".to_string()),
        evidence_hash: Some("0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b".to_string()),
        verification_steps: standard_verification_steps(StepStatus::Completed),
        agent_results: Some(vec![
            agent("Satellite Analysis", 92.4, 4.2, 98, 0.4),
            agent("Baseline Auditor", 88.5, 5.1, 100, 0.35),
            agent("Anomaly Detector", 95.0, 2.3, 99, 0.25),
        ]),
        consensus_data: Some(ConsensusData {
            weighted_confidence: 91.7,
            max_anomaly: 5.1,
            final_verified_tons: 99,
            reduction_reason: None,
        }),
        available_supply: 99.0,
    }
}

pub fn sample_audit_event() -> AuditEvent {
    AuditEvent {
        id: "evt-initial-001".to_string(),
        timestamp: "2024-01-15T10:30:00Z".to_string(),
        project_id: SAMPLE_PROJECT_ID.to_string(),
        project_name: SAMPLE_NAME.to_string(),
        attestation_hash: Some(SAMPLE_ATTESTATION.to_string()),
        action_type: AuditAction::Verification,
        details: "Multi-agent consensus achieved. Project verified with 91.7% confidence. \
                  99 tons minted to ledger."
            .to_string(),
    }
}
