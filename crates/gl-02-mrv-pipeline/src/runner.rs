//! Sequential pipeline runner

use crate::adapters::TracingHook;
use crate::context::PipelineContext;
use crate::domain::{
    format_duration, PipelineConfig, PipelineParams, PipelineReport, PipelineResult,
    PipelineSummary,
};
use crate::ports::StageHook;
use crate::stages::{default_stages, now_timestamp, Stage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::info;

const SUCCESS: &str = "success";
const RUNNER: &str = "runner";

/// Runs stages one after another, awaiting each before starting the next.
///
/// There is no retry, cancellation or timeout: the first stage error ends
/// the run and is returned to the caller.
pub struct MrvPipeline {
    stages: Vec<Box<dyn Stage>>,
    hooks: Vec<Arc<dyn StageHook>>,
    config: PipelineConfig,
}

impl MrvPipeline {
    /// Pipeline with the four standard stages and the tracing hook.
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        Self::with_stages(config, default_stages())
    }

    /// Pipeline with custom stages and the tracing hook.
    pub fn with_stages(config: PipelineConfig, stages: Vec<Box<dyn Stage>>) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self {
            stages,
            hooks: vec![Arc::new(TracingHook)],
            config,
        })
    }

    /// Register an additional hook.
    pub fn with_hook(mut self, hook: Arc<dyn StageHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run the pipeline with a freshly seeded random source.
    pub async fn run(
        &self,
        project_id: &str,
        params: PipelineParams,
    ) -> PipelineResult<PipelineReport> {
        self.run_with_rng(project_id, params, StdRng::from_entropy())
            .await
    }

    /// Run the pipeline drawing all fabricated figures from `rng`.
    pub async fn run_with_rng(
        &self,
        project_id: &str,
        params: PipelineParams,
        rng: StdRng,
    ) -> PipelineResult<PipelineReport> {
        info!(
            project_id,
            stages = ?self.stage_names(),
            "Starting verification pipeline"
        );
        let started = Instant::now();
        let mut ctx = PipelineContext::new(project_id, params, self.config.delay_scale, rng);

        for stage in &self.stages {
            let name = stage.name();
            self.hooks
                .iter()
                .for_each(|h| h.on_stage_start(project_id, name));

            let stage_started = Instant::now();
            if let Err(err) = stage.run(&mut ctx).await {
                self.hooks
                    .iter()
                    .for_each(|h| h.on_stage_failed(project_id, name, &err));
                return Err(err);
            }

            let elapsed = stage_started.elapsed();
            self.hooks
                .iter()
                .for_each(|h| h.on_stage_complete(project_id, name, elapsed));
        }

        let report = build_report(&ctx, started.elapsed().as_secs_f64())?;
        self.hooks
            .iter()
            .for_each(|h| h.on_pipeline_complete(&report));
        Ok(report)
    }
}

fn build_report(ctx: &PipelineContext, seconds: f64) -> PipelineResult<PipelineReport> {
    let consensus = ctx.require_consensus(RUNNER)?.clone();
    let blockchain = ctx.require_blockchain(RUNNER)?.clone();

    let summary = PipelineSummary {
        verified_credits: consensus.verified_credits,
        confidence: consensus.weighted_confidence,
        tx_hash: blockchain.tx_hash.clone(),
        timestamp: now_timestamp(),
    };

    Ok(PipelineReport {
        project_id: ctx.project_id().to_string(),
        status: SUCCESS.to_string(),
        duration: format_duration(seconds),
        baseline: ctx.require_baseline(RUNNER)?.clone(),
        satellite: ctx.require_satellite(RUNNER)?.clone(),
        consensus,
        blockchain,
        summary,
    })
}
