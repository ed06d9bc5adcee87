//! # gl-04-api-gateway
//!
//! HTTP interface of the Green Ledger backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     API GATEWAY (gl-04)                       │
//! │                                                               │
//! │   CORS → Tracing span + metrics → Timeout → Body limit        │
//! │                          │                                    │
//! │          ┌───────────────┴────────────────┐                   │
//! │          ▼                                ▼                   │
//! │   Pipeline triggers                Registry endpoints         │
//! │   /api/verify/:projectId           /api/projects[/:id/...]    │
//! │   /api/mrv/run                     /api/market/{buy,retire}   │
//! │   /api/credits/mint                /api/audit, /api/dashboard │
//! │          │                         /api/role, /api/reset      │
//! │          ▼                                │                   │
//! │   tokio::spawn(MrvPipeline::run)          ▼                   │
//! │   (gl-02, detached)                RegistryApi (gl-03)        │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pipeline triggers acknowledge with `{"status":"started",…}` before the
//! simulated run finishes; its progress is only visible in the logs and in
//! `GET /api/metrics`. Registry endpoints answer synchronously and render
//! failures as `{"error":{"code","message"}}`.
//!
//! ## Usage
//!
//! ```ignore
//! use gl_04_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let gateway = ApiGatewayService::new(GatewayConfig::default(), registry)?;
//! gateway.start(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod service;

// Re-export main types
pub use domain::{ApiError, ConfigError, GatewayConfig, GatewayError};
pub use handlers::AppState;
pub use middleware::GatewayMetrics;
pub use service::ApiGatewayService;
