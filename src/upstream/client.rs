// External auth handler client
//
// The gateway treats the authentication service as a single call:
// handle(standard request) → standard response. Session logic, credential
// checks and the service's own routing all live on the other side of this
// boundary.

use crate::config::UpstreamConfig;
use crate::error::{GatewayError, Result};
use crate::metrics;
use crate::models::{AuthRequest, AuthResponse};
use axum::http::{header, HeaderMap};
use phf::phf_set;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Connection-scoped headers that must not travel past this hop.
static HOP_BY_HOP: phf::Set<&'static str> = phf_set! {
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
};

pub struct AuthClient {
    http_client: Client,
    base_url: Url,
}

impl AuthClient {
    /// Create a pooled client for the configured auth service.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Config(format!(
                "upstream base URL is not absolute: {}",
                config.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_max_idle_per_host(config.pool_max_idle)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Forward a standard request and capture the standard response.
    ///
    /// One shot: no retries, and transport failures propagate to the caller
    /// unmodified. The response header map is taken whole, so multi-valued
    /// headers (`set-cookie` in particular) keep every entry.
    pub async fn handle(&self, request: AuthRequest) -> Result<AuthResponse> {
        let url = self.rebase(&request.url)?;
        let method = request.method.clone();
        debug!("forwarding {} {} to auth service", method, url.path());

        let mut outbound = self
            .http_client
            .request(request.method, url)
            .headers(forwardable_headers(&request.headers));
        if let Some(body) = request.body {
            outbound = outbound.body(body);
        }

        let started = Instant::now();
        let response = outbound
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        metrics::record_upstream_call(
            method.as_str(),
            status.as_u16(),
            started.elapsed().as_secs_f64(),
        );

        Ok(AuthResponse {
            status,
            headers,
            body,
        })
    }

    /// Map the envelope's path and query onto the upstream base URL. The auth
    /// service sees the same request target the client sent.
    fn rebase(&self, url: &Url) -> Result<Url> {
        let mut target = self.base_url.join(url.path())?;
        target.set_query(url.query());
        Ok(target)
    }
}

/// Strip hop-by-hop headers plus `host` and `content-length`, which the
/// client stack recomputes for the new connection.
fn forwardable_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if HOP_BY_HOP.contains(name.as_str()) {
            continue;
        }
        if name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwardable_headers_drop_connection_scope() {
        let mut inbound = HeaderMap::new();
        inbound.insert("connection", HeaderValue::from_static("keep-alive"));
        inbound.insert("host", HeaderValue::from_static("gateway.local"));
        inbound.insert("content-length", HeaderValue::from_static("12"));
        inbound.insert("cookie", HeaderValue::from_static("session=abc"));
        inbound.append("accept", HeaderValue::from_static("application/json"));

        let forwarded = forwardable_headers(&inbound);
        assert!(forwarded.get("connection").is_none());
        assert!(forwarded.get("host").is_none());
        assert!(forwarded.get("content-length").is_none());
        assert_eq!(forwarded.get("cookie").unwrap(), "session=abc");
        assert_eq!(forwarded.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn rebase_keeps_path_and_query() {
        let config = UpstreamConfig {
            base_url: "http://auth.internal:3000".to_string(),
            ..UpstreamConfig::default()
        };
        let client = AuthClient::new(&config).unwrap();
        let url = Url::parse("https://public.example.com/api/auth/session?active=1").unwrap();
        let rebased = client.rebase(&url).unwrap();
        assert_eq!(
            rebased.as_str(),
            "http://auth.internal:3000/api/auth/session?active=1"
        );
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let config = UpstreamConfig {
            base_url: "auth.internal".to_string(),
            ..UpstreamConfig::default()
        };
        assert!(AuthClient::new(&config).is_err());
    }
}
