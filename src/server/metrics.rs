use crate::library::Operation;
use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all library metrics
const PREFIX: &str = "library";

/// Outcome code recorded for successful calls
pub const OUTCOME_OK: &str = "ok";

/// The instruments updated on every library operation.
///
/// Cloning is cheap and clones share the same underlying counters.
#[derive(Clone)]
pub struct LibraryMetrics {
    pub requests_total: IntCounterVec,
    pub request_duration_seconds: HistogramVec,
    pub errors_total: IntCounterVec,
}

impl LibraryMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let requests_total = IntCounterVec::new(
            Opts::new(
                format!("{PREFIX}_requests_total"),
                "Total number of library requests",
            ),
            &["operation", "code"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                format!("{PREFIX}_request_duration_seconds"),
                "Library request duration in seconds",
            )
            .buckets(vec![
                0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0,
            ]),
            &["operation"],
        )?;

        let errors_total = IntCounterVec::new(
            Opts::new(
                format!("{PREFIX}_errors_total"),
                "Total number of failed library requests",
            ),
            &["operation"],
        )?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
            errors_total,
        })
    }

    pub fn register(&self, registry: &Registry) -> prometheus::Result<()> {
        registry.register(Box::new(self.requests_total.clone()))?;
        registry.register(Box::new(self.request_duration_seconds.clone()))?;
        registry.register(Box::new(self.errors_total.clone()))?;
        Ok(())
    }

    /// Record one completed operation.
    pub fn record(&self, operation: Operation, code: &str, duration: Duration) {
        let operation = operation.name();

        self.requests_total
            .with_label_values(&[operation, code])
            .inc();

        self.request_duration_seconds
            .with_label_values(&[operation])
            .observe(duration.as_secs_f64());

        if code != OUTCOME_OK {
            self.errors_total.with_label_values(&[operation]).inc();
        }
    }

    pub fn requests(&self, operation: Operation, code: &str) -> u64 {
        self.requests_total
            .with_label_values(&[operation.name(), code])
            .get()
    }

    pub fn observations(&self, operation: Operation) -> u64 {
        self.request_duration_seconds
            .with_label_values(&[operation.name()])
            .get_sample_count()
    }

    pub fn errors(&self, operation: Operation) -> u64 {
        self.errors_total
            .with_label_values(&[operation.name()])
            .get()
    }
}

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref LIBRARY_METRICS: LibraryMetrics =
        LibraryMetrics::new().expect("Failed to create library metrics");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Ignore errors if already registered (for tests)
    let _ = LIBRARY_METRICS.register(&REGISTRY);

    tracing::info!("Metrics system initialized successfully");
}

/// Render the global registry in Prometheus text format.
pub fn encode_metrics() -> prometheus::Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    match encode_metrics() {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
