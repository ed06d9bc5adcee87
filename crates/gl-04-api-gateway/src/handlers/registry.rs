//! Registry endpoints

use super::{with_registry, AppState, JsonBody};
use crate::domain::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gl_01_verification::ReplayOutcome;
use gl_03_registry::{AppState as LedgerState, DashboardStats, NewProject, RetirementReceipt, TradeReceipt};
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{AuditEvent, Project, UserRole};

/// Body of buy and retire requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditsRequest {
    pub project_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleRequest {
    pub role: UserRole,
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    with_registry(&state, |r| Ok(r.projects())).await.map(Json)
}

pub async fn submit_project(
    State(state): State<AppState>,
    JsonBody(project): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = with_registry(&state, move |r| r.submit_project(project)).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    with_registry(&state, move |r| r.project(&id)).await.map(Json)
}

/// `POST /api/projects/:id/consensus`
pub async fn run_consensus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    with_registry(&state, move |r| r.verify_project(&id))
        .await
        .map(Json)
}

/// `POST /api/projects/:id/replay`
pub async fn replay(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReplayOutcome>, ApiError> {
    with_registry(&state, move |r| r.replay_project(&id))
        .await
        .map(Json)
}

pub async fn buy_credits(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreditsRequest>,
) -> Result<Json<TradeReceipt>, ApiError> {
    with_registry(&state, move |r| r.buy_credits(&req.project_id, req.amount))
        .await
        .map(Json)
}

pub async fn retire_credits(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreditsRequest>,
) -> Result<Json<RetirementReceipt>, ApiError> {
    with_registry(&state, move |r| r.retire_credits(&req.project_id, req.amount))
        .await
        .map(Json)
}

pub async fn audit_log(State(state): State<AppState>) -> Result<Json<Vec<AuditEvent>>, ApiError> {
    with_registry(&state, |r| Ok(r.audit_log())).await.map(Json)
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    with_registry(&state, |r| Ok(r.dashboard())).await.map(Json)
}

/// `PUT /api/role`
pub async fn set_role(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RoleRequest>,
) -> Result<Json<Value>, ApiError> {
    let role = with_registry(&state, move |r| r.set_role(req.role)).await?;
    Ok(Json(json!({ "role": role })))
}

/// `POST /api/reset`
pub async fn reset(State(state): State<AppState>) -> Result<Json<LedgerState>, ApiError> {
    with_registry(&state, |r| r.reset()).await.map(Json)
}

/// `GET /api/metrics`
pub async fn metrics(State(state): State<AppState>) -> Json<Value> {
    Json(state.metrics.to_json())
}
