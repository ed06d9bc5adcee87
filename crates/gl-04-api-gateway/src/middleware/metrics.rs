//! Request and pipeline counters.
//!
//! Exposed as JSON on `GET /api/metrics`.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// API Gateway metrics
#[derive(Debug, Default)]
pub struct GatewayMetrics {
    // Request counters
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub requests_error: AtomicU64,

    // Pipeline counters
    pub pipelines_started: AtomicU64,
    pub pipelines_succeeded: AtomicU64,
    pub pipelines_failed: AtomicU64,

    // Latency tracking
    pub total_latency_ms: AtomicU64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed request
    pub fn record_request(&self, success: bool, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }

        self.total_latency_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
    }

    pub fn record_pipeline_started(&self) {
        self.pipelines_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the end of a detached pipeline run
    pub fn record_pipeline_finished(&self, success: bool) {
        if success {
            self.pipelines_succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.pipelines_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Pipelines started but not yet finished
    pub fn pipelines_running(&self) -> u64 {
        let started = self.pipelines_started.load(Ordering::Relaxed);
        let finished = self.pipelines_succeeded.load(Ordering::Relaxed)
            + self.pipelines_failed.load(Ordering::Relaxed);
        started.saturating_sub(finished)
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "success": self.requests_success.load(Ordering::Relaxed),
                "error": self.requests_error.load(Ordering::Relaxed),
                "averageLatencyMs": self.average_latency_ms(),
            },
            "pipelines": {
                "started": self.pipelines_started.load(Ordering::Relaxed),
                "succeeded": self.pipelines_succeeded.load(Ordering::Relaxed),
                "failed": self.pipelines_failed.load(Ordering::Relaxed),
                "running": self.pipelines_running(),
            }
        })
    }
}
