//! # gl-02-mrv-pipeline
//!
//! Mock MRV (measurement, reporting and verification) pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         MrvPipeline                          │
//! │                                                              │
//! │  Baseline ──► Satellite ──► Consensus ──► Blockchain         │
//! │      │            │             │              │             │
//! │      └────────────┴──── PipelineContext ───────┘             │
//! │                                                              │
//! │  StageHook: on_stage_start / complete / failed (TracingHook) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stage sleeps through fixed simulated steps (about 9.8 s in total at
//! `delay_scale = 1.0`) and fabricates plausible figures from a non-seeded
//! random source. Nothing here is deterministic; the deterministic
//! verification engine lives in `gl-01-verification` and does not share
//! this generator.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gl_02_mrv_pipeline::{MrvPipeline, PipelineConfig, PipelineParams};
//!
//! let pipeline = MrvPipeline::new(PipelineConfig::default())?;
//! let report = pipeline.run("proj-1", PipelineParams::from_value(&body)).await?;
//! println!("{} credits, tx {}", report.summary.verified_credits, report.summary.tx_hash);
//! ```

pub mod adapters;
pub mod context;
pub mod domain;
pub mod ports;
pub mod runner;
pub mod stages;

// Re-export main types
pub use adapters::TracingHook;
pub use context::PipelineContext;
pub use domain::{
    BaselineOutput, BlockchainOutput, ConsensusOutput, PipelineConfig, PipelineError,
    PipelineParams, PipelineReport, PipelineResult, PipelineSummary, SatelliteOutput,
};
pub use ports::StageHook;
pub use runner::MrvPipeline;
pub use stages::{default_stages, Stage};
