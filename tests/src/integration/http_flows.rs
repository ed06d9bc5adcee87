//! # HTTP Flows
//!
//! The gateway (gl-04) served over a real socket, backed by a file-persisted
//! registry (gl-03) and an instant MRV pipeline (gl-02).

#[cfg(test)]
mod tests {
    use gl_02_mrv_pipeline::PipelineConfig;
    use gl_03_registry::{FileStorage, RegistryService, SAMPLE_PROJECT_ID};
    use gl_04_api_gateway::{ApiGatewayService, GatewayConfig};
    use reqwest::header::CONTENT_TYPE;
    use reqwest::{Client, Method, StatusCode};
    use serde_json::Value;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct RunningGateway {
        addr: SocketAddr,
        client: Client,
        gateway: Arc<ApiGatewayService>,
        shutdown: oneshot::Sender<()>,
        handle: JoinHandle<()>,
    }

    impl RunningGateway {
        async fn start(dir: &std::path::Path) -> Self {
            let registry = RegistryService::open(FileStorage::open(dir).unwrap()).unwrap();
            let config = GatewayConfig {
                pipeline: PipelineConfig::instant(),
                ..GatewayConfig::default()
            };
            let gateway = Arc::new(ApiGatewayService::new(config, Arc::new(registry)).unwrap());

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let (shutdown, rx) = oneshot::channel::<()>();

            let server = Arc::clone(&gateway);
            let handle = tokio::spawn(async move {
                server
                    .serve(listener, async {
                        let _ = rx.await;
                    })
                    .await
                    .unwrap();
            });

            let client = Client::builder()
                .timeout(Duration::from_secs(5))
                .pool_max_idle_per_host(0)
                .build()
                .unwrap();

            Self {
                addr,
                client,
                gateway,
                shutdown,
                handle,
            }
        }

        async fn stop(self) {
            let _ = self.shutdown.send(());
            self.handle.await.unwrap();
        }

        async fn request(
            &self,
            method: Method,
            path: &str,
            body: Option<&str>,
        ) -> (StatusCode, Value) {
            let mut request = self
                .client
                .request(method, format!("http://{}{path}", self.addr))
                .header(CONTENT_TYPE, "application/json");
            if let Some(body) = body {
                request = request.body(body.to_string());
            }

            let response = request.send().await.unwrap();
            let status = response.status();
            (status, response.json().await.unwrap())
        }
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_health_and_pipeline_trigger_over_tcp() {
        let dir = tempfile::tempdir().unwrap();
        let server = RunningGateway::start(dir.path()).await;

        let (status, body) = server.request(Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = server
            .request(
                Method::POST,
                "/api/verify/test-project-123",
                Some(r#"{"method":"AWD","area":100}"#),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "started");
        assert_eq!(body["message"], "Verification pipeline initiated");

        let (status, body) = server.request(Method::POST, "/api/verify/p", Some("{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_JSON");

        let metrics = server.gateway.metrics();
        assert_eq!(
            metrics
                .pipelines_started
                .load(std::sync::atomic::Ordering::Relaxed),
            1
        );

        server.stop().await;
    }

    #[tokio::test]
    async fn test_ledger_persists_across_server_restart() {
        let dir = tempfile::tempdir().unwrap();

        let server = RunningGateway::start(dir.path()).await;
        let (status, project) = server
            .request(
                Method::POST,
                "/api/projects",
                Some(r#"{"name":"Mangrove Restoration","type":"Blue Carbon","location":"Sundarbans","claimedReduction":1200}"#),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = project["id"].as_str().unwrap().to_string();

        let (status, _) = server
            .request(Method::POST, &format!("/api/projects/{id}/consensus"), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let buy = format!(r#"{{"projectId":"{SAMPLE_PROJECT_ID}","amount":12.5}}"#);
        let (status, receipt) = server.request(Method::POST, "/api/market/buy", Some(&buy)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["creditsOwned"], 12.5);
        server.stop().await;

        let server = RunningGateway::start(dir.path()).await;
        let (status, stored) = server
            .request(Method::GET, &format!("/api/projects/{id}"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(stored["attestationHash"].is_string());

        let (status, replay) = server
            .request(Method::POST, &format!("/api/projects/{id}/replay"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(replay["matches"], true);

        let (_, dashboard) = server.request(Method::GET, "/api/dashboard", None).await;
        assert_eq!(dashboard["activeProjects"], 2);
        assert_eq!(dashboard["creditsOwned"], 12.5);

        server.stop().await;
    }
}
