// Prometheus metrics registry and collectors

use lazy_static::lazy_static;
use prometheus::{
    CounterVec, HistogramVec, Opts, Registry, TextEncoder, Encoder,
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Total requests bridged to the auth service
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("authgate_requests_total", "Total requests bridged to the auth service"),
        &["method", "status_code"],
        REGISTRY
    ).unwrap();

    /// End-to-end request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("authgate_request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["method", "status_code"],
        REGISTRY
    ).unwrap();

    /// Total calls to the auth service
    pub static ref UPSTREAM_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("authgate_upstream_calls_total", "Total auth service calls"),
        &["method", "status_code"],
        REGISTRY
    ).unwrap();

    /// Auth service call duration
    pub static ref UPSTREAM_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("authgate_upstream_duration_seconds", "Auth service call duration")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        &["method"],
        REGISTRY
    ).unwrap();

    /// Bridge translation and transport errors
    pub static ref BRIDGE_ERRORS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("authgate_bridge_errors_total", "Total bridge errors"),
        &["direction", "error_type"], // direction: request, upstream, response
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        REQUESTS_TOTAL.with_label_values(&["GET", "200"]).inc();
        UPSTREAM_CALLS.with_label_values(&["GET", "200"]).inc();
        BRIDGE_ERRORS.with_label_values(&["upstream", "transport"]).inc();

        let metrics = gather_metrics();
        assert!(metrics.contains("authgate_requests_total"));
        assert!(metrics.contains("authgate_upstream_calls_total"));
        assert!(metrics.contains("authgate_bridge_errors_total"));
    }
}
