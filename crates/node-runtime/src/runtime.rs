//! Node runtime: wires storage, registry and gateway together.

use crate::config::NodeConfig;
use anyhow::{Context, Result};
use gl_03_registry::{FileStorage, RegistryApi, RegistryService, STATE_KEY};
use gl_04_api_gateway::ApiGatewayService;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// The main node runtime orchestrating all subsystems.
pub struct NodeRuntime {
    gateway: ApiGatewayService,
    registry: Arc<dyn RegistryApi>,
}

impl NodeRuntime {
    /// Open the persisted ledger and build the gateway.
    ///
    /// ## Initialization Order
    ///
    /// 1. Open the state directory
    /// 2. Hydrate the registry from the saved state (or the initial state)
    /// 3. Validate the gateway configuration and build the pipeline
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!(state_dir = %config.state_dir.display(), "Creating Green Ledger node runtime");

        let storage = FileStorage::open(&config.state_dir).with_context(|| {
            format!("Failed to open state directory {}", config.state_dir.display())
        })?;
        let registry: Arc<dyn RegistryApi> = Arc::new(
            RegistryService::open(storage).context("Failed to load ledger state")?,
        );

        let stats = registry.dashboard();
        info!(
            key = STATE_KEY,
            projects = stats.active_projects,
            audit_events = stats.audit_events,
            "Ledger state loaded"
        );

        let gateway = ApiGatewayService::new(config.gateway, Arc::clone(&registry))
            .context("Failed to create API gateway")?;

        Ok(Self { gateway, registry })
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("===========================================");
        info!("  Green Ledger MRV Server v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        self.gateway
            .start(shutdown)
            .await
            .context("API gateway failed")?;

        info!("Shutdown complete");
        Ok(())
    }

    pub fn gateway(&self) -> &ApiGatewayService {
        &self.gateway
    }

    pub fn registry(&self) -> Arc<dyn RegistryApi> {
        Arc::clone(&self.registry)
    }
}
