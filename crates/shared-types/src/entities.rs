//! # Core Domain Entities
//!
//! Defines the ledger entities persisted by the registry and produced by the
//! verification engine.
//!
//! ## Clusters
//!
//! - **Projects**: `Project`, `ProjectStatus`, `VerificationStep`
//! - **Verification**: `AgentResult`, `ConsensusData`
//! - **Ledger**: `AuditEvent`, `AuditAction`, `UserRole`, `Portfolio`

use crate::errors::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CLUSTER A: PROJECTS
// =============================================================================

/// Lifecycle status of a carbon offset project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Submitted, no verification has run yet.
    #[default]
    Unverified,
    /// Verification is in progress.
    Verifying,
    /// Consensus passed every threshold.
    Verified,
    /// Consensus passed with moderate anomalies; credits were reduced.
    ApprovedReduced,
    /// Consensus failed; the project awaits a manual audit.
    Frozen,
    /// Rejected by a verifier.
    Rejected,
    /// Listed on the marketplace.
    Tradable,
}

impl ProjectStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Unverified => "unverified",
            ProjectStatus::Verifying => "verifying",
            ProjectStatus::Verified => "verified",
            ProjectStatus::ApprovedReduced => "approved-reduced",
            ProjectStatus::Frozen => "frozen",
            ProjectStatus::Rejected => "rejected",
            ProjectStatus::Tradable => "tradable",
        }
    }

    /// Whether credits may be minted for a project in this status.
    pub fn allows_minting(&self) -> bool {
        !matches!(self, ProjectStatus::Frozen | ProjectStatus::Rejected)
    }

    /// Whether credits of a project in this status can be bought.
    pub fn is_tradeable(&self) -> bool {
        matches!(
            self,
            ProjectStatus::Verified | ProjectStatus::ApprovedReduced | ProjectStatus::Tradable
        )
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unverified" => Ok(ProjectStatus::Unverified),
            "verifying" => Ok(ProjectStatus::Verifying),
            "verified" => Ok(ProjectStatus::Verified),
            "approved-reduced" => Ok(ProjectStatus::ApprovedReduced),
            "frozen" => Ok(ProjectStatus::Frozen),
            "rejected" => Ok(ProjectStatus::Rejected),
            "tradable" => Ok(ProjectStatus::Tradable),
            other => Err(ParseEnumError::new("project status", other)),
        }
    }
}

/// Progress of a single verification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// One row of the verification timeline shown for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStep {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
    pub icon_name: String,
}

impl VerificationStep {
    fn new(id: &str, name: &str, icon_name: &str, status: StepStatus) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            icon_name: icon_name.to_string(),
        }
    }
}

/// The six standard steps of a verification run.
///
/// The submission step is always completed; the rest carry `rest`.
pub fn standard_verification_steps(rest: StepStatus) -> Vec<VerificationStep> {
    vec![
        VerificationStep::new("submitted", "Submitted", "FileText", StepStatus::Completed),
        VerificationStep::new("baseline", "Baseline Agent Analysis", "Bot", rest),
        VerificationStep::new("satellite", "Satellite Agent Analysis", "Satellite", rest),
        VerificationStep::new("anomaly", "Anomaly Agent Analysis", "AlertTriangle", rest),
        VerificationStep::new("consensus", "Consensus Calculation", "Calculator", rest),
        VerificationStep::new("result", "Final Result", "Shield", rest),
    ]
}

/// A carbon offset project and its verification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub location: String,
    /// Claimed reduction in tons of CO2e.
    pub claimed_reduction: f64,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub submitted_date: String,
    #[serde(default)]
    pub attestation_hash: Option<String>,
    #[serde(default)]
    pub mint_tx_hash: Option<String>,
    #[serde(default)]
    pub evidence_hash: Option<String>,
    #[serde(default)]
    pub verification_steps: Vec<VerificationStep>,
    #[serde(default)]
    pub agent_results: Option<Vec<AgentResult>>,
    #[serde(default)]
    pub consensus_data: Option<ConsensusData>,
    /// Credits still available for purchase.
    #[serde(default)]
    pub available_supply: f64,
}

impl Project {
    /// Whether a verification run has been recorded for this project.
    pub fn is_verified(&self) -> bool {
        self.agent_results.is_some()
    }

    /// Final verified tons, zero when no consensus has been recorded.
    pub fn verified_tons(&self) -> i64 {
        self.consensus_data
            .as_ref()
            .map(|c| c.final_verified_tons)
            .unwrap_or(0)
    }
}

// =============================================================================
// CLUSTER B: VERIFICATION
// =============================================================================

/// Output of one verification agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResult {
    pub agent_name: String,
    /// Confidence in [0, 100], one decimal.
    pub confidence_score: f64,
    /// Anomaly score in [0, 100], one decimal.
    pub anomaly_score: f64,
    pub estimated_verified_tons: i64,
    /// Consensus weight; the weights of a full agent set sum to 1.0.
    pub weight: f64,
}

/// Persisted consensus figures for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusData {
    pub weighted_confidence: f64,
    pub max_anomaly: f64,
    pub final_verified_tons: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction_reason: Option<String>,
}

// =============================================================================
// CLUSTER C: LEDGER
// =============================================================================

/// Kind of action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditAction {
    Submission,
    Verification,
    Minting,
    Trade,
    Retirement,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Submission => "submission",
            AuditAction::Verification => "verification",
            AuditAction::Minting => "minting",
            AuditAction::Trade => "trade",
            AuditAction::Retirement => "retirement",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub project_id: String,
    pub project_name: String,
    #[serde(default)]
    pub attestation_hash: Option<String>,
    pub action_type: AuditAction,
    pub details: String,
}

/// Role the current user acts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    #[default]
    ProjectOwner,
    Verifier,
    BuyerSeller,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::ProjectOwner => "project-owner",
            UserRole::Verifier => "verifier",
            UserRole::BuyerSeller => "buyer-seller",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project-owner" => Ok(UserRole::ProjectOwner),
            "verifier" => Ok(UserRole::Verifier),
            "buyer-seller" => Ok(UserRole::BuyerSeller),
            other => Err(ParseEnumError::new("user role", other)),
        }
    }
}

/// Credits held by the current user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub credits_owned: f64,
    pub collateral_requirement: f64,
}
