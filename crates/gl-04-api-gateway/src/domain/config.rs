//! Gateway configuration with validation.

use gl_02_mrv_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Default HTTP port of the backend server.
pub const DEFAULT_PORT: u16 = 3001;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Request limits
    pub limits: LimitsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Simulated MRV pipeline tuning
    pub pipeline: PipelineConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.timeouts.request.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        if self.cors.allow_credentials && self.cors.has_wildcard() {
            return Err(ConfigError::InvalidCors(
                "credentials cannot be combined with wildcard origins or headers".into(),
            ));
        }

        self.pipeline
            .validate()
            .map_err(|e| ConfigError::InvalidPipeline(e.to_string()))?;

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// CORS configuration
///
/// Browser clients are served from a different origin during development,
/// so every origin is allowed unless configured otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: u64,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "OPTIONS"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_headers: vec!["*".to_string()],
            expose_headers: Vec::new(),
            max_age: 3600,
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Whether origins or headers are configured as `*`.
    pub fn has_wildcard(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
            || self.allowed_headers.iter().any(|h| h == "*")
    }
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 100 * 1024,
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upper bound on handling one request. Pipelines run detached and are
    /// not subject to it.
    #[serde(with = "humantime_serde")]
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("invalid cors: {0}")]
    InvalidCors(String),

    #[error("invalid pipeline settings: {0}")]
    InvalidPipeline(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.pipeline.delay_scale, 1.0);
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = GatewayConfig::default();
        config.limits.max_request_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLimit(_))
        ));

        let mut config = GatewayConfig::default();
        config.timeouts.request = Duration::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_negative_delay_scale_rejected() {
        let mut config = GatewayConfig::default();
        config.pipeline.delay_scale = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPipeline(_))
        ));

        config.pipeline.delay_scale = 1e20;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPipeline(_))
        ));
    }

    #[test]
    fn test_credentials_with_wildcard_rejected() {
        let mut config = GatewayConfig::default();
        config.cors.allow_credentials = true;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCors(_))));

        config.cors.allowed_origins = vec!["https://ledger.example".to_string()];
        config.cors.allowed_headers = vec!["content-type".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"http":{"port":8080},"timeouts":{"request":"5s"},"pipeline":{"delay_scale":0.1}}"#,
        )
        .unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.timeouts.request, Duration::from_secs(5));
        assert_eq!(config.pipeline.delay_scale, 0.1);
        assert!(config.cors.enabled);
    }
}
