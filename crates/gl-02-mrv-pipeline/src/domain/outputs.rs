//! Stage outputs and the final pipeline report (camelCase on the wire)

use serde::{Deserialize, Serialize};

/// Baseline emissions estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineOutput {
    /// kg CH4, two decimals.
    pub baseline_emissions: f64,
    /// kg CH4, two decimals.
    pub project_emissions: f64,
    /// tCO2e, two decimals.
    pub reduction: f64,
    pub area: f64,
    pub method: String,
    /// kg CH4 per hectare, formatted with two decimals.
    pub emission_factor: String,
}

/// Satellite imagery analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteOutput {
    pub ndvi: f64,
    pub confidence: f64,
    pub water_management: f64,
    pub vegetation_health: f64,
    pub image_count: u32,
    pub timespan: String,
}

/// Weighted combination of the baseline and satellite stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusOutput {
    pub weighted_confidence: f64,
    pub verified_credits: f64,
    pub baseline_confidence: f64,
    pub satellite_confidence: f64,
    pub algorithm: String,
    pub timestamp: String,
}

/// Simulated mint transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainOutput {
    pub tx_hash: String,
    pub block_number: u64,
    pub mint_amount: f64,
    pub gas_used: String,
    pub network: String,
    pub contract_address: String,
    pub timestamp: String,
    pub status: String,
}

/// Headline figures of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub verified_credits: f64,
    pub confidence: f64,
    pub tx_hash: String,
    pub timestamp: String,
}

/// Complete result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub project_id: String,
    pub status: String,
    /// Wall-clock duration, e.g. `"9.84s"`.
    pub duration: String,
    pub baseline: BaselineOutput,
    pub satellite: SatelliteOutput,
    pub consensus: ConsensusOutput,
    pub blockchain: BlockchainOutput,
    pub summary: PipelineSummary,
}

/// Format a duration in seconds the way reports print it.
pub fn format_duration(seconds: f64) -> String {
    format!("{seconds:.2}s")
}
