//! Shared state of one pipeline run

use crate::domain::{
    BaselineOutput, BlockchainOutput, ConsensusOutput, PipelineError, PipelineParams,
    PipelineResult, SatelliteOutput,
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore};
use std::time::Duration;

/// Inputs, random source and accumulated stage outputs of a run.
///
/// Each stage reads the outputs of earlier stages and stores its own.
pub struct PipelineContext {
    project_id: String,
    params: PipelineParams,
    delay_scale: f64,
    rng: StdRng,
    pub baseline: Option<BaselineOutput>,
    pub satellite: Option<SatelliteOutput>,
    pub consensus: Option<ConsensusOutput>,
    pub blockchain: Option<BlockchainOutput>,
}

impl PipelineContext {
    pub fn new(
        project_id: impl Into<String>,
        params: PipelineParams,
        delay_scale: f64,
        rng: StdRng,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            params,
            delay_scale,
            rng,
            baseline: None,
            satellite: None,
            consensus: None,
            blockchain: None,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Uniform draw in [0, 1).
    pub fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform integer in [0, upper).
    pub fn random_below(&mut self, upper: u32) -> u32 {
        self.rng.gen_range(0..upper)
    }

    /// `0x`-prefixed lowercase hex string of `bytes` random bytes.
    pub fn random_hex(&mut self, bytes: usize) -> String {
        let mut buf = vec![0u8; bytes];
        self.rng.fill_bytes(&mut buf);
        format!("0x{}", hex::encode(buf))
    }

    /// Simulate a processing step of `millis` milliseconds.
    pub async fn step(&self, millis: u64) {
        if self.delay_scale <= 0.0 {
            return;
        }
        // Saturate instead of panicking when the product leaves `Duration`'s range.
        let secs = Duration::from_millis(millis).as_secs_f64() * self.delay_scale;
        let scaled = Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX);
        tokio::time::sleep(scaled).await;
    }

    pub fn require_baseline(&self, stage: &'static str) -> PipelineResult<&BaselineOutput> {
        self.baseline.as_ref().ok_or(PipelineError::MissingStageOutput {
            stage,
            missing: "baseline",
        })
    }

    pub fn require_satellite(&self, stage: &'static str) -> PipelineResult<&SatelliteOutput> {
        self.satellite.as_ref().ok_or(PipelineError::MissingStageOutput {
            stage,
            missing: "satellite",
        })
    }

    pub fn require_consensus(&self, stage: &'static str) -> PipelineResult<&ConsensusOutput> {
        self.consensus.as_ref().ok_or(PipelineError::MissingStageOutput {
            stage,
            missing: "consensus",
        })
    }

    pub fn require_blockchain(&self, stage: &'static str) -> PipelineResult<&BlockchainOutput> {
        self.blockchain
            .as_ref()
            .ok_or(PipelineError::MissingStageOutput {
                stage,
                missing: "blockchain",
            })
    }
}
