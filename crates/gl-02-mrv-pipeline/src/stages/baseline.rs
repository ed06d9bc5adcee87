//! Baseline emissions stage

use super::Stage;
use crate::context::PipelineContext;
use crate::domain::{to_fixed, BaselineOutput, PipelineResult, DEFAULT_METHOD};
use async_trait::async_trait;
use tracing::info;

/// Global warming potential of CH4 relative to CO2.
const CH4_GWP: f64 = 28.0;

/// Compares traditional continuous-flooding emissions with the project's
/// methodology.
pub struct BaselineStage;

#[async_trait]
impl Stage for BaselineStage {
    fn name(&self) -> &'static str {
        "baseline"
    }

    async fn run(&self, ctx: &mut PipelineContext) -> PipelineResult<()> {
        info!(project_id = %ctx.project_id(), "[Baseline] Running Baseline Agent");

        ctx.step(500).await;
        info!(
            method = %ctx.params().method_or_default(),
            "[Baseline] Analyzing project methodology"
        );
        ctx.step(800).await;
        info!("[Baseline] Calculating emission factors");
        ctx.step(700).await;
        info!("[Baseline] Computing baseline vs project emissions");
        ctx.step(500).await;

        let area = ctx.params().area_or_default();
        let method = ctx.params().method_or_default().to_string();
        let factor = 70.0 + ctx.random() * 20.0;

        let output = baseline_output(area, method, factor);
        info!(
            area = output.area,
            method = %output.method,
            baseline_emissions = output.baseline_emissions,
            project_emissions = output.project_emissions,
            reduction_tco2e = output.reduction,
            "[Baseline] Baseline Agent completed"
        );

        ctx.baseline = Some(output);
        Ok(())
    }
}

/// Emission figures for `area` hectares at `factor` kg CH4 per hectare.
pub fn baseline_output(area: f64, method: String, factor: f64) -> BaselineOutput {
    let baseline_emissions = to_fixed(area * factor, 2);
    let reduction_factor = if method == DEFAULT_METHOD { 0.5 } else { 0.6 };
    let project_emissions = to_fixed(baseline_emissions * reduction_factor, 2);
    let reduction = to_fixed((baseline_emissions - project_emissions) * CH4_GWP / 1000.0, 2);

    BaselineOutput {
        baseline_emissions,
        project_emissions,
        reduction,
        area,
        method,
        emission_factor: format!("{factor:.2}"),
    }
}
