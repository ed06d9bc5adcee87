//! # Green Ledger Node Runtime
//!
//! Entry point wiring for the Green Ledger backend.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment ([`NodeConfig::from_env`])
//! 2. Initialize logging (`gl-telemetry`)
//! 3. Open the ledger state directory and hydrate the registry
//! 4. Serve the HTTP gateway until Ctrl+C
//!
//! ```text
//! env ──► NodeConfig ──► FileStorage ──► RegistryService (gl-03)
//!                              │                 │
//!                              ▼                 ▼
//!                      GatewayConfig ──► ApiGatewayService (gl-04) ──► MrvPipeline (gl-02)
//! ```

pub mod config;
pub mod runtime;

pub use config::{NodeConfig, NodeConfigError};
pub use runtime::NodeRuntime;
