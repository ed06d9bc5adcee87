//! Weighted consensus over agent results
//!
//! Status policy (first match wins, evaluated on unrounded values):
//!
//! | Condition                                   | Status             | Final tons                       |
//! |---------------------------------------------|--------------------|----------------------------------|
//! | confidence < 70 OR max anomaly > 30         | `frozen`           | 0                                |
//! | confidence < 85 OR max anomaly > 15         | `approved-reduced` | round(round(weighted tons) × 0.9) |
//! | otherwise                                   | `verified`         | round(weighted tons)             |

use super::format::format_fixed_1;
use super::rounding::{round_1dp, round_to_i64};
use super::{VerificationError, VerificationResult};
use serde::{Deserialize, Serialize};
use shared_types::{AgentResult, ConsensusData, ProjectStatus};

/// Below this weighted confidence a project is frozen.
pub const FREEZE_CONFIDENCE_FLOOR: f64 = 70.0;
/// Above this anomaly a project is frozen.
pub const FREEZE_ANOMALY_CEILING: f64 = 30.0;
/// Below this weighted confidence credits are reduced.
pub const FULL_CONFIDENCE_FLOOR: f64 = 85.0;
/// Above this anomaly credits are reduced.
pub const FULL_ANOMALY_CEILING: f64 = 15.0;
/// Multiplier applied to credits on reduced approval.
pub const REDUCTION_FACTOR: f64 = 0.9;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Result of aggregating agent scores.
///
/// `weighted_confidence` and `max_anomaly` are kept unrounded; `to_data`
/// produces the persisted one-decimal figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusOutcome {
    pub weighted_confidence: f64,
    pub max_anomaly: f64,
    pub weighted_tons: f64,
    pub final_verified_tons: i64,
    pub status: ProjectStatus,
    pub reduction_reason: Option<String>,
}

impl ConsensusOutcome {
    /// Persisted form with one-decimal confidence and anomaly.
    pub fn to_data(&self) -> ConsensusData {
        ConsensusData {
            weighted_confidence: round_1dp(self.weighted_confidence),
            max_anomaly: round_1dp(self.max_anomaly),
            final_verified_tons: self.final_verified_tons,
            reduction_reason: self.reduction_reason.clone(),
        }
    }
}

/// Aggregate agent results into a consensus outcome.
pub fn calculate_consensus(agent_results: &[AgentResult]) -> VerificationResult<ConsensusOutcome> {
    if agent_results.is_empty() {
        return Err(VerificationError::NoAgentResults);
    }

    let total_weight: f64 = agent_results.iter().map(|r| r.weight).sum();
    if (total_weight - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(VerificationError::InvalidWeights {
            total: total_weight,
        });
    }

    let weighted_confidence = agent_results
        .iter()
        .fold(0.0, |acc, r| acc + r.confidence_score * r.weight);
    let max_anomaly = agent_results
        .iter()
        .map(|r| r.anomaly_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let weighted_tons = agent_results
        .iter()
        .fold(0.0, |acc, r| acc + r.estimated_verified_tons as f64 * r.weight);

    let (status, final_verified_tons, reduction_reason) =
        decide(weighted_confidence, max_anomaly, weighted_tons);

    Ok(ConsensusOutcome {
        weighted_confidence,
        max_anomaly,
        weighted_tons,
        final_verified_tons,
        status,
        reduction_reason,
    })
}

/// Apply the status policy to aggregate figures.
pub fn decide(
    weighted_confidence: f64,
    max_anomaly: f64,
    weighted_tons: f64,
) -> (ProjectStatus, i64, Option<String>) {
    let rounded_tons = round_to_i64(weighted_tons);

    if weighted_confidence < FREEZE_CONFIDENCE_FLOOR || max_anomaly > FREEZE_ANOMALY_CEILING {
        let reason = format!(
            "Critical anomalies detected ({}%) or low aggregate confidence ({}%). Project frozen pending manual audit.",
            format_fixed_1(max_anomaly),
            format_fixed_1(weighted_confidence)
        );
        (ProjectStatus::Frozen, 0, Some(reason))
    } else if weighted_confidence < FULL_CONFIDENCE_FLOOR || max_anomaly > FULL_ANOMALY_CEILING {
        let reason = format!(
            "Moderate anomalies detected ({}%). Credits awarded with conservative reduction based on multi-agent consensus.",
            format_fixed_1(max_anomaly)
        );
        let reduced = round_to_i64(rounded_tons as f64 * REDUCTION_FACTOR);
        (ProjectStatus::ApprovedReduced, reduced, Some(reason))
    } else {
        (ProjectStatus::Verified, rounded_tons, None)
    }
}
