//! # Green Ledger Telemetry
//!
//! Structured logging for every Green Ledger binary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gl_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `green-ledger` | Service name on every line |
//! | `GL_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `GL_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `GL_CONSOLE_OUTPUT` | `true` | Console output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install logging and announce the service.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)?;
    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}

/// Convenience macro for creating a span with service context.
///
/// ```rust,ignore
/// let _span = gl_telemetry::service_span!("verify_project", project_id = %id).entered();
/// ```
#[macro_export]
macro_rules! service_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
