//! Middleware stack for the API Gateway.
//!
//! Layer order: Request → CORS → Tracing → Timeout → Body limit → Handler

pub mod cors;
pub mod metrics;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::GatewayMetrics;
pub use tracing::{TracingLayer, TracingService};
