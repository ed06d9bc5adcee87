//! Weighted consensus stage

use super::{now_timestamp, Stage};
use crate::context::PipelineContext;
use crate::domain::{to_fixed, BaselineOutput, ConsensusOutput, PipelineResult, SatelliteOutput};
use async_trait::async_trait;
use tracing::info;

/// Implicit confidence of the baseline methodology.
pub const BASELINE_CONFIDENCE: f64 = 92.0;
pub const BASELINE_WEIGHT: f64 = 0.6;
pub const SATELLITE_WEIGHT: f64 = 0.4;
pub const ALGORITHM: &str = "Weighted Deterministic Consensus";

/// Combines baseline and satellite confidence into verified credits.
pub struct ConsensusStage;

#[async_trait]
impl Stage for ConsensusStage {
    fn name(&self) -> &'static str {
        "consensus"
    }

    async fn run(&self, ctx: &mut PipelineContext) -> PipelineResult<()> {
        ctx.require_baseline(self.name())?;
        ctx.require_satellite(self.name())?;
        info!(project_id = %ctx.project_id(), "[Consensus] Running deterministic consensus");

        ctx.step(400).await;
        info!("[Consensus] Weighing baseline and satellite data");
        ctx.step(400).await;
        info!("[Consensus] Calculating weighted confidence");
        ctx.step(200).await;

        let output = combine(
            ctx.require_baseline(self.name())?,
            ctx.require_satellite(self.name())?,
            now_timestamp(),
        );

        info!(
            algorithm = ALGORITHM,
            baseline_confidence = output.baseline_confidence,
            satellite_confidence = output.satellite_confidence,
            weighted_confidence = output.weighted_confidence,
            verified_credits = output.verified_credits,
            "[Consensus] Consensus achieved"
        );

        ctx.consensus = Some(output);
        Ok(())
    }
}

/// Weighted confidence (one decimal) and the credits it supports (two decimals).
pub fn combine(
    baseline: &BaselineOutput,
    satellite: &SatelliteOutput,
    timestamp: String,
) -> ConsensusOutput {
    let weighted_confidence = to_fixed(
        BASELINE_CONFIDENCE * BASELINE_WEIGHT + satellite.confidence * SATELLITE_WEIGHT,
        1,
    );
    let verified_credits = to_fixed(baseline.reduction * (weighted_confidence / 100.0), 2);

    ConsensusOutput {
        weighted_confidence,
        verified_credits,
        baseline_confidence: BASELINE_CONFIDENCE,
        satellite_confidence: satellite.confidence,
        algorithm: ALGORITHM.to_string(),
        timestamp,
    }
}
