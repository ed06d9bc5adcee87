//! # Node Configuration
//!
//! Assembled from environment variables on top of the gateway defaults.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | `3001` | HTTP port |
//! | `GL_HOST` | `0.0.0.0` | HTTP bind address |
//! | `GL_STATE_DIR` | `./data` | Directory of the persisted ledger state |
//! | `GL_PIPELINE_DELAY_SCALE` | `1.0` | Multiplier on simulated pipeline delays |

use gl_04_api_gateway::GatewayConfig;
use gl_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::str::FromStr;

/// Default directory of the persisted ledger state.
pub const DEFAULT_STATE_DIR: &str = "./data";

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// HTTP gateway configuration.
    pub gateway: GatewayConfig,
    /// Where the ledger state file lives.
    pub state_dir: PathBuf,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum NodeConfigError {
    #[error("{name}={value:?} is not valid: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl NodeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, NodeConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NodeConfigError> {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(port) = parse_var(&lookup, "PORT")? {
            config.gateway.http.port = port;
        }
        if let Some(host) = parse_var(&lookup, "GL_HOST")? {
            config.gateway.http.host = host;
        }
        if let Some(dir) = lookup("GL_STATE_DIR").filter(|d| !d.is_empty()) {
            config.state_dir = PathBuf::from(dir);
        }
        if let Some(scale) = parse_var(&lookup, "GL_PIPELINE_DELAY_SCALE")? {
            config.gateway.pipeline.delay_scale = scale;
        }

        Ok(config)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, NodeConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| NodeConfigError::InvalidVar {
            name,
            reason: e.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NodeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.gateway.http.port, 3001);
        assert_eq!(config.state_dir, PathBuf::from("./data"));
        assert_eq!(config.gateway.pipeline.delay_scale, 1.0);
    }

    #[test]
    fn test_overrides() {
        let config = NodeConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("GL_HOST", "127.0.0.1"),
            ("GL_STATE_DIR", "/var/lib/green-ledger"),
            ("GL_PIPELINE_DELAY_SCALE", "0.25"),
            ("OTEL_SERVICE_NAME", "ledger-test"),
        ]))
        .unwrap();

        assert_eq!(config.gateway.http.port, 8080);
        assert_eq!(config.gateway.http.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.state_dir, PathBuf::from("/var/lib/green-ledger"));
        assert_eq!(config.gateway.pipeline.delay_scale, 0.25);
        assert_eq!(config.telemetry.service_name, "ledger-test");
    }

    #[test]
    fn test_invalid_port_reported() {
        let err = NodeConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().starts_with("PORT=\"eighty\" is not valid"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = NodeConfig::from_lookup(lookup(&[("PORT", " "), ("GL_STATE_DIR", "")])).unwrap();
        assert_eq!(config.gateway.http.port, 3001);
        assert_eq!(config.state_dir, PathBuf::from("./data"));
    }
}
