//! Green Ledger backend binary.

use anyhow::{Context, Result};
use node_runtime::{NodeConfig, NodeRuntime};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("Invalid configuration")?;

    gl_telemetry::init_telemetry(&config.telemetry).context("Failed to initialize logging")?;

    let runtime = NodeRuntime::new(config)?;

    info!("Node is running. Press Ctrl+C to stop.");
    runtime
        .run(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received shutdown signal"),
                Err(e) => {
                    warn!(error = %e, "Failed to listen for Ctrl+C, running until killed");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
}
