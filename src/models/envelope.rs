//! Transport-agnostic request/response envelopes.
//!
//! Both envelopes live for exactly one request: the gateway builds an
//! [`AuthRequest`] from the platform request, the auth service turns it into
//! an [`AuthResponse`], and the bridge translates that back onto the wire.
//! Nothing here is shared or retained across invocations.

use axum::http::{header, HeaderMap, Method, StatusCode};
use bytes::Bytes;
use url::Url;

/// Standard request handed to the external auth handler.
///
/// Headers keep the platform's case-insensitive multimap semantics: a key may
/// carry several values and their relative order is preserved. The body is
/// `None` for bodiless methods and for reads that produced no content.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Standard response produced by the external auth handler.
///
/// `set-cookie` entries stay as individual values in the header map; they are
/// never joined into a single string.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl AuthResponse {
    /// Declared content type, or the empty string when absent.
    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
    }
}

/// Platform-facing body after content-type branching.
///
/// Exactly one representation is chosen per response: parsed JSON for
/// `application/json`, decoded text for `text/*`, raw bytes for everything
/// else (including empty bodies).
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeBody {
    Json(serde_json::Value),
    Text(String),
    Binary(Bytes),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn content_type_defaults_to_empty() {
        let response = AuthResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        };
        assert_eq!(response.content_type(), "");
    }

    #[test]
    fn content_type_reads_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let response = AuthResponse {
            status: StatusCode::OK,
            headers,
            body: Bytes::new(),
        };
        assert_eq!(response.content_type(), "application/json; charset=utf-8");
    }
}
