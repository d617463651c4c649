// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics,
    BRIDGE_ERRORS,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    UPSTREAM_CALLS,
    UPSTREAM_DURATION,
};

/// Helper to record bridged request metrics
pub fn record_request(method: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, &status_code.to_string()])
        .observe(duration_secs);
}

/// Helper to record auth service call metrics
pub fn record_upstream_call(method: &str, status_code: u16, duration_secs: f64) {
    UPSTREAM_CALLS
        .with_label_values(&[method, &status_code.to_string()])
        .inc();

    UPSTREAM_DURATION
        .with_label_values(&[method])
        .observe(duration_secs);
}

/// Helper to record bridge errors
pub fn record_bridge_error(direction: &str, error_type: &str) {
    BRIDGE_ERRORS.with_label_values(&[direction, error_type]).inc();
}
