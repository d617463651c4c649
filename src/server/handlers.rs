// HTTP request handlers

use super::routes::AppState;
use crate::bridge;
use crate::error::GatewayError;
use crate::metrics;
use crate::utils::logging;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream: String,
    pub version: String,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        upstream: state.auth_client.base_url().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}

/// Wildcard handler for the auth path prefix.
///
/// Builds the standard request envelope, hands it to the auth service, and
/// translates the response back onto the platform, keeping every
/// `set-cookie` value intact.
pub async fn auth_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, GatewayError> {
    let started = Instant::now();
    let (parts, body) = request.into_parts();
    let method = parts.method.clone();

    // Read the raw body only for body-bearing methods. An unreadable or
    // over-limit body counts as absent; the auth service decides whether the
    // request actually required one.
    let raw_body = if bridge::has_request_body(&parts.method) {
        axum::body::to_bytes(body, state.config.auth.max_body_bytes)
            .await
            .ok()
    } else {
        None
    };

    let envelope = bridge::build_auth_request(&parts, raw_body, &state.config.auth)?;
    debug!("bridging {} {}", envelope.method, envelope.url.path());

    let upstream_response = match state.auth_client.handle(envelope).await {
        Ok(response) => response,
        Err(e) => {
            metrics::record_bridge_error("upstream", "transport");
            let message = e.to_string();
            if state.config.logging.sanitize_headers {
                error!("auth handler call failed: {}", logging::sanitize(&message));
            } else {
                error!("auth handler call failed: {}", message);
            }
            return Err(e);
        }
    };

    let status = upstream_response.status;
    let response = bridge::into_platform_response(upstream_response).map_err(|e| {
        metrics::record_bridge_error("response", "translation");
        e
    })?;

    metrics::record_request(
        method.as_str(),
        status.as_u16(),
        started.elapsed().as_secs_f64(),
    );

    Ok(response)
}
