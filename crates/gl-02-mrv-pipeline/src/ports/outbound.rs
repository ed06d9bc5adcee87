//! Driven ports (Outbound)

use crate::domain::{PipelineError, PipelineReport};
use std::time::Duration;

/// Observer of pipeline progress.
///
/// Hooks are invoked in registration order. They must not block; a hook
/// that needs I/O should hand the event off to its own task.
pub trait StageHook: Send + Sync {
    /// A stage is about to run.
    fn on_stage_start(&self, _project_id: &str, _stage: &'static str) {}

    /// A stage finished successfully after `elapsed`.
    fn on_stage_complete(&self, _project_id: &str, _stage: &'static str, _elapsed: Duration) {}

    /// A stage failed; the run stops after this call.
    fn on_stage_failed(&self, _project_id: &str, _stage: &'static str, _error: &PipelineError) {}

    /// All stages completed.
    fn on_pipeline_complete(&self, _report: &PipelineReport) {}
}
