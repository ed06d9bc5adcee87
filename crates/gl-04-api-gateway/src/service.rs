//! API Gateway service - main entry point.
//!
//! Builds the HTTP router over the registry and the MRV pipeline and serves
//! it until the shutdown future resolves.

use crate::domain::{codes, ApiError, GatewayConfig, GatewayError};
use crate::handlers::{pipeline, registry, AppState};
use crate::middleware::{create_cors_layer, GatewayMetrics, TracingLayer};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::Router;
use gl_02_mrv_pipeline::MrvPipeline;
use gl_03_registry::RegistryApi;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(config: GatewayConfig, registry: Arc<dyn RegistryApi>) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let pipeline = Arc::new(MrvPipeline::new(config.pipeline)?);

        Ok(Self {
            state: AppState {
                registry,
                pipeline,
                metrics: Arc::new(GatewayMetrics::new()),
            },
            config,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.state.metrics)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(addr = %addr, "Starting HTTP server");
        info!("Health check: http://{}/api/health", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("API Gateway stopped");
        Ok(())
    }

    /// Build the HTTP router with its middleware stack.
    pub fn router(&self) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(create_cors_layer(&self.config.cors))
            .layer(TracingLayer::with_metrics(self.metrics()))
            .layer(TimeoutLayer::new(self.config.timeouts.request));

        Router::new()
            .route("/api/health", get(pipeline::health))
            .route("/api/verify/:project_id", post(pipeline::verify))
            .route("/api/mrv/run", post(pipeline::mrv_run))
            .route("/api/credits/mint", post(pipeline::mint))
            .route(
                "/api/projects",
                get(registry::list_projects).post(registry::submit_project),
            )
            .route("/api/projects/:id", get(registry::get_project))
            .route("/api/projects/:id/consensus", post(registry::run_consensus))
            .route("/api/projects/:id/replay", post(registry::replay))
            .route("/api/market/buy", post(registry::buy_credits))
            .route("/api/market/retire", post(registry::retire_credits))
            .route("/api/audit", get(registry::audit_log))
            .route("/api/dashboard", get(registry::dashboard))
            .route("/api/role", put(registry::set_role))
            .route("/api/reset", post(registry::reset))
            .route("/api/metrics", get(registry::metrics))
            .fallback(not_found)
            .layer(RequestBodyLimitLayer::new(self.config.limits.max_request_size))
            .layer(middleware)
            .with_state(self.state.clone())
    }
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, codes::ROUTE_NOT_FOUND, "Route not found")
}
