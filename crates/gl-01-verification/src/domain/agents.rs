//! Deterministic agent score generator
//!
//! Each project id maps to a fixed seed (the sum of its UTF-16 code units).
//! Every agent role draws three fractions from `frac(sin(seed + offset) * 10000)`
//! at consecutive offsets and scales them into its confidence, anomaly and
//! tons ranges.

use super::rounding::{round_1dp, round_to_i64};
use super::{VerificationError, VerificationResult};
use shared_types::AgentResult;

/// Number of generator draws consumed by each agent role.
const DRAWS_PER_AGENT: u32 = 3;

/// The three verification agents, in consensus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    Baseline,
    Satellite,
    AnomalyDetector,
}

/// Scaling profile for one agent role.
///
/// `value = base + fraction * span`; tons are `claimed * (tons_base + fraction * tons_span)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub confidence_base: f64,
    pub confidence_span: f64,
    pub anomaly_span: f64,
    pub tons_base: f64,
    pub tons_span: f64,
    pub weight: f64,
}

impl AgentRole {
    /// All roles in the order their draws are consumed.
    pub const ALL: [AgentRole; 3] = [
        AgentRole::Baseline,
        AgentRole::Satellite,
        AgentRole::AnomalyDetector,
    ];

    pub fn profile(&self) -> AgentProfile {
        match self {
            AgentRole::Baseline => AgentProfile {
                name: "Baseline Agent",
                confidence_base: 85.0,
                confidence_span: 10.0,
                anomaly_span: 15.0,
                tons_base: 0.9,
                tons_span: 0.1,
                weight: 0.4,
            },
            AgentRole::Satellite => AgentProfile {
                name: "Satellite Agent",
                confidence_base: 80.0,
                confidence_span: 15.0,
                anomaly_span: 20.0,
                tons_base: 0.85,
                tons_span: 0.15,
                weight: 0.35,
            },
            AgentRole::AnomalyDetector => AgentProfile {
                name: "Anomaly detection Agent",
                confidence_base: 90.0,
                confidence_span: 8.0,
                anomaly_span: 10.0,
                tons_base: 0.95,
                tons_span: 0.05,
                weight: 0.25,
            },
        }
    }

    fn index(&self) -> u32 {
        match self {
            AgentRole::Baseline => 0,
            AgentRole::Satellite => 1,
            AgentRole::AnomalyDetector => 2,
        }
    }
}

/// Seed derived from a project id: the sum of its UTF-16 code units.
pub fn project_seed(project_id: &str) -> u32 {
    project_id.encode_utf16().map(u32::from).sum()
}

/// Fractional part of `sin(s) * 10000`, in [0, 1).
pub fn seeded_fraction(s: f64) -> f64 {
    let x = s.sin() * 10_000.0;
    x - x.floor()
}

/// Generate the three agent results for a project.
///
/// Pure: the same `project_id` and `claimed_reduction` always return the
/// same results.
pub fn generate_agent_outputs(
    project_id: &str,
    claimed_reduction: f64,
) -> VerificationResult<Vec<AgentResult>> {
    if !claimed_reduction.is_finite() || claimed_reduction < 0.0 {
        return Err(VerificationError::InvalidClaimedReduction(claimed_reduction));
    }

    let seed = project_seed(project_id);
    let draw = |offset: u32| seeded_fraction(f64::from(seed) + f64::from(offset));

    let results = AgentRole::ALL
        .iter()
        .map(|role| {
            let p = role.profile();
            let base = role.index() * DRAWS_PER_AGENT;
            let confidence = p.confidence_base + draw(base) * p.confidence_span;
            let anomaly = draw(base + 1) * p.anomaly_span;
            let tons = claimed_reduction * (p.tons_base + draw(base + 2) * p.tons_span);

            AgentResult {
                agent_name: p.name.to_string(),
                confidence_score: round_1dp(confidence),
                anomaly_score: round_1dp(anomaly),
                estimated_verified_tons: round_to_i64(tons),
                weight: p.weight,
            }
        })
        .collect();

    Ok(results)
}
