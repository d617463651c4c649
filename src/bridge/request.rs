// Inbound translation (platform request → standard auth request)

use crate::config::AuthConfig;
use crate::error::Result;
use crate::models::AuthRequest;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Method};
use bytes::Bytes;
use tracing::debug;
use url::Url;

/// Build the standard auth request from the platform request head and the
/// already-collected body bytes.
///
/// The platform layer's own validation is trusted: nothing here rejects a
/// request. The only fallible step is absolute-URL resolution.
pub fn build_auth_request(
    parts: &Parts,
    raw_body: Option<Bytes>,
    config: &AuthConfig,
) -> Result<AuthRequest> {
    let url = resolve_request_url(parts, config)?;
    let headers = copy_headers(&parts.headers);

    // GET/HEAD are bodiless by the HTTP semantics we target; an empty read
    // on any other method counts as "no content", not a zero-length body.
    let body = if has_request_body(&parts.method) {
        raw_body.filter(|bytes| !bytes.is_empty())
    } else {
        None
    };

    debug!(
        "built auth request: {} {} ({} header entries, body: {})",
        parts.method,
        url,
        headers.len(),
        body.is_some()
    );

    Ok(AuthRequest {
        method: parts.method.clone(),
        url,
        headers,
        body,
    })
}

/// Whether a method conventionally carries a request body.
///
/// Comparison is case-insensitive so extension methods spelled in lowercase
/// are still treated as bodiless when they name GET or HEAD.
pub fn has_request_body(method: &Method) -> bool {
    let name = method.as_str();
    !name.eq_ignore_ascii_case("GET") && !name.eq_ignore_ascii_case("HEAD")
}

/// Resolve the absolute request URL from the forwarded scheme and authority
/// plus the request target, validated through the URL parser rather than
/// assembled by raw string concatenation.
fn resolve_request_url(parts: &Parts, config: &AuthConfig) -> Result<Url> {
    let scheme = if config.trust_forwarded {
        forwarded_value(&parts.headers, "x-forwarded-proto")
            .unwrap_or(&config.default_scheme)
    } else {
        parts
            .uri
            .scheme_str()
            .unwrap_or(&config.default_scheme)
    };

    let authority = if config.trust_forwarded {
        forwarded_value(&parts.headers, "x-forwarded-host")
    } else {
        None
    };
    let authority = authority
        .or_else(|| forwarded_value(&parts.headers, "host"))
        .or_else(|| parts.uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    let origin = Url::parse(&format!("{scheme}://{authority}/"))?;
    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Ok(origin.join(target)?)
}

/// Copy every header entry, preserving per-key value order and multiplicity.
fn copy_headers(platform: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(platform.len());
    for (name, value) in platform {
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// First comma-separated token of a header value, trimmed. Forwarded headers
/// accumulate one entry per proxy hop; the left-most is the original client.
fn forwarded_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
