//! Stage hook that logs progress through `tracing`

use crate::domain::{PipelineError, PipelineReport};
use crate::ports::StageHook;
use std::time::Duration;
use tracing::{error, info};

/// Default hook installed on every pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl StageHook for TracingHook {
    fn on_stage_start(&self, project_id: &str, stage: &'static str) {
        info!(project_id, stage, "Stage started");
    }

    fn on_stage_complete(&self, project_id: &str, stage: &'static str, elapsed: Duration) {
        info!(
            project_id,
            stage,
            elapsed_ms = elapsed.as_millis() as u64,
            "Stage completed"
        );
    }

    fn on_stage_failed(&self, project_id: &str, stage: &'static str, err: &PipelineError) {
        error!(project_id, stage, error = %err, "Pipeline error");
    }

    fn on_pipeline_complete(&self, report: &PipelineReport) {
        info!(
            project_id = %report.project_id,
            duration = %report.duration,
            verified_credits = report.summary.verified_credits,
            confidence = report.summary.confidence,
            tx_hash = %report.summary.tx_hash,
            "Verification pipeline completed"
        );
    }
}
