//! Gateway error types and their HTTP rendering.
//!
//! Every failed request answers with `{"error":{"code":…,"message":…}}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gl_01_verification::VerificationError;
use gl_02_mrv_pipeline::PipelineError;
use gl_03_registry::RegistryError;
use serde_json::json;

/// Machine-readable error codes
pub mod codes {
    pub const INVALID_JSON: &str = "INVALID_JSON";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
    pub const ROUTE_NOT_FOUND: &str = "ROUTE_NOT_FOUND";
    pub const PROJECT_NOT_FOUND: &str = "PROJECT_NOT_FOUND";
    pub const ALREADY_VERIFIED: &str = "ALREADY_VERIFIED";
    pub const NOT_TRADEABLE: &str = "NOT_TRADEABLE";
    pub const INSUFFICIENT_SUPPLY: &str = "INSUFFICIENT_SUPPLY";
    pub const INSUFFICIENT_CREDITS: &str = "INSUFFICIENT_CREDITS";
    pub const NOT_VERIFIED: &str = "NOT_VERIFIED";
    pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
    pub const INVALID_PROJECT: &str = "INVALID_PROJECT";
    pub const VERIFICATION_FAILED: &str = "VERIFICATION_FAILED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Error returned to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Body is not valid JSON or does not have the expected shape
    pub fn invalid_json(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            codes::INVALID_JSON,
            format!("Invalid JSON body: {}", details.into()),
        )
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, codes::INVALID_REQUEST, details)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::INTERNAL_ERROR,
            format!("Internal error: {}", details.into()),
        )
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let (status, code) = match &err {
            RegistryError::ProjectNotFound(_) => (StatusCode::NOT_FOUND, codes::PROJECT_NOT_FOUND),
            RegistryError::AlreadyVerified { .. } => {
                (StatusCode::CONFLICT, codes::ALREADY_VERIFIED)
            }
            RegistryError::NotTradeable { .. } => (StatusCode::CONFLICT, codes::NOT_TRADEABLE),
            RegistryError::InsufficientSupply { .. } => {
                (StatusCode::CONFLICT, codes::INSUFFICIENT_SUPPLY)
            }
            RegistryError::InsufficientCredits { .. } => {
                (StatusCode::CONFLICT, codes::INSUFFICIENT_CREDITS)
            }
            RegistryError::Verification(VerificationError::NotVerified(_)) => {
                (StatusCode::CONFLICT, codes::NOT_VERIFIED)
            }
            RegistryError::InvalidAmount(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, codes::INVALID_AMOUNT)
            }
            RegistryError::InvalidProject(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, codes::INVALID_PROJECT)
            }
            RegistryError::Verification(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, codes::VERIFICATION_FAILED)
            }
            RegistryError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, codes::STORAGE_ERROR),
        };
        Self::new(status, code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

/// Gateway lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pipeline setup failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Server(#[from] std::io::Error),
}
