//! HTTP handlers
//!
//! - pipeline: health check and the fire-and-forget MRV pipeline triggers
//! - registry: projects, verification, marketplace and audit endpoints

pub mod pipeline;
pub mod registry;

use crate::domain::{codes, ApiError};
use crate::middleware::GatewayMetrics;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use gl_02_mrv_pipeline::MrvPipeline;
use gl_03_registry::{RegistryApi, RegistryResult};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn RegistryApi>,
    pub pipeline: Arc<MrvPipeline>,
    pub metrics: Arc<GatewayMetrics>,
}

/// JSON request body whose failures render as [`ApiError`].
///
/// An empty body reads as `{}`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                codes::PAYLOAD_TOO_LARGE
            } else {
                codes::INVALID_REQUEST
            };
            ApiError::new(rejection.status(), code, rejection.body_text())
        })?;

        parse_json(&bytes).map(JsonBody)
    }
}

/// Parse a request body, treating a blank body as an empty object.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let input: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };
    serde_json::from_slice(input).map_err(|e| ApiError::invalid_json(e.to_string()))
}

/// Run a registry operation off the async runtime.
///
/// Registry writes persist synchronously, so they go through the blocking pool.
pub(crate) async fn with_registry<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&dyn RegistryApi) -> RegistryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let registry = Arc::clone(&state.registry);
    tokio::task::spawn_blocking(move || op(registry.as_ref()))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .map_err(ApiError::from)
}
