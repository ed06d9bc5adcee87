//! Pipeline stages
//!
//! Stages run in a fixed order; each one sleeps through its simulated steps
//! and stores its output on the [`PipelineContext`].
//!
//! ```text
//! Baseline ──► Satellite ──► Consensus ──► Blockchain
//!  (2.5s)        (4.0s)        (1.0s)        (2.3s)
//! ```

mod baseline;
mod blockchain;
mod consensus;
mod satellite;

pub use baseline::BaselineStage;
pub use blockchain::BlockchainStage;
pub use consensus::ConsensusStage;
pub use satellite::SatelliteStage;

use crate::context::PipelineContext;
use crate::domain::PipelineResult;
use async_trait::async_trait;

/// One step of the MRV pipeline.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Stage name used in logs and hook callbacks.
    fn name(&self) -> &'static str;

    /// Run the stage against the shared context.
    async fn run(&self, ctx: &mut PipelineContext) -> PipelineResult<()>;
}

/// The four standard stages in execution order.
pub fn default_stages() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(BaselineStage),
        Box::new(SatelliteStage),
        Box::new(ConsensusStage),
        Box::new(BlockchainStage),
    ]
}

/// Current UTC time in RFC 3339 with millisecond precision.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
