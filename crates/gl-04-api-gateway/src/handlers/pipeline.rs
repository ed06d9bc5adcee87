//! Health check and MRV pipeline triggers.
//!
//! Trigger endpoints acknowledge immediately; the pipeline keeps running in
//! a spawned task and reports through logs and metrics only.

use super::{AppState, JsonBody};
use crate::domain::ApiError;
use axum::extract::{Path, State};
use axum::Json;
use gl_02_mrv_pipeline::domain::truthy_number;
use gl_02_mrv_pipeline::PipelineParams;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, Instrument};

/// What started a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineTrigger {
    Verification,
    MrvAnalysis,
    Minting,
}

impl PipelineTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineTrigger::Verification => "verification",
            PipelineTrigger::MrvAnalysis => "mrv-analysis",
            PipelineTrigger::Minting => "minting",
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Backend server is running"
    }))
}

/// `POST /api/verify/:projectId`
pub async fn verify(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> Json<Value> {
    info!(project_id = %project_id, params = %body, "Received verification request");

    spawn_pipeline(
        &state,
        project_id.clone(),
        PipelineParams::from_value(&body),
        PipelineTrigger::Verification,
    );

    Json(json!({
        "status": "started",
        "message": "Verification pipeline initiated",
        "projectId": project_id
    }))
}

/// `POST /api/mrv/run`
pub async fn mrv_run(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<Value>, ApiError> {
    let (project_id, params) = split_project_id(body)?;
    info!(project_id = %project_id, "Received MRV analysis request");

    spawn_pipeline(
        &state,
        project_id.clone(),
        PipelineParams::from_value(&params),
        PipelineTrigger::MrvAnalysis,
    );

    Ok(Json(json!({
        "status": "started",
        "message": "MRV analysis initiated",
        "projectId": project_id
    })))
}

/// `POST /api/credits/mint`
///
/// `amount` overrides any `mintAmount` in the body; a missing or zero amount
/// mints the verified credits.
pub async fn mint(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<Value>, ApiError> {
    let (project_id, mut params) = split_project_id(body)?;
    let amount = params
        .as_object_mut()
        .and_then(|o| o.remove("amount"))
        .unwrap_or(Value::Null);
    info!(project_id = %project_id, amount = %amount, "Received minting request");

    let params = PipelineParams {
        mint_amount: truthy_number(&amount),
        ..PipelineParams::from_value(&params)
    };
    spawn_pipeline(&state, project_id.clone(), params, PipelineTrigger::Minting);

    Ok(Json(json!({
        "status": "started",
        "message": "Credit minting initiated",
        "projectId": project_id,
        "amount": amount
    })))
}

/// Take `projectId` out of a request body, leaving the pipeline parameters.
fn split_project_id(mut body: Value) -> Result<(String, Value), ApiError> {
    let id = body.as_object_mut().and_then(|o| o.remove("projectId"));
    match id {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok((id, body)),
        Some(Value::Number(n)) => Ok((n.to_string(), body)),
        _ => Err(ApiError::invalid_request("projectId is required")),
    }
}

/// Run the pipeline detached from the request.
fn spawn_pipeline(
    state: &AppState,
    project_id: String,
    params: PipelineParams,
    trigger: PipelineTrigger,
) {
    let pipeline = Arc::clone(&state.pipeline);
    let metrics = Arc::clone(&state.metrics);
    metrics.record_pipeline_started();

    let span = gl_telemetry::service_span!(
        "mrv_pipeline",
        project_id = %project_id,
        trigger = trigger.as_str()
    );

    tokio::spawn(
        async move {
            match pipeline.run(&project_id, params).await {
                Ok(report) => {
                    metrics.record_pipeline_finished(true);
                    info!(
                        duration = %report.duration,
                        verified_credits = report.summary.verified_credits,
                        tx_hash = %report.summary.tx_hash,
                        "Pipeline completed successfully"
                    );
                }
                Err(e) => {
                    metrics.record_pipeline_finished(false);
                    error!(error = %e, "Pipeline failed");
                }
            }
        }
        .instrument(span),
    );
}
