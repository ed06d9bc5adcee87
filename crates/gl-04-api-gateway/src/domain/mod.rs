//! Gateway domain: configuration and errors

pub mod config;
pub mod error;

pub use config::{
    ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig, TimeoutConfig, DEFAULT_PORT,
};
pub use error::{codes, ApiError, GatewayError};
