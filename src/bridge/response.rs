// Outbound translation (standard auth response → platform response)

use crate::error::{GatewayError, Result};
use crate::models::{AuthResponse, BridgeBody};
use axum::body::Body;
use axum::http::{header, Response};
use tracing::debug;

/// Translate the external handler's response onto a platform response.
///
/// Cookies are written first, through the multi-value accessor, so every
/// `set-cookie` value survives as its own header line. All remaining headers
/// go through the single-header set. Framing headers are dropped: the body
/// may be re-serialized, so the platform recomputes length and encoding.
pub fn into_platform_response(upstream: AuthResponse) -> Result<Response<Body>> {
    let payload = branch_body(&upstream)?;

    let mut response = Response::new(Body::empty());
    *response.status_mut() = upstream.status;

    let cookies: Vec<_> = upstream
        .headers
        .get_all(header::SET_COOKIE)
        .iter()
        .cloned()
        .collect();
    if !cookies.is_empty() {
        debug!("passing through {} set-cookie values", cookies.len());
    }
    for cookie in cookies {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }

    for (name, value) in upstream.headers.iter() {
        if name == header::SET_COOKIE {
            continue;
        }
        if name == header::CONTENT_LENGTH || name == header::TRANSFER_ENCODING {
            continue;
        }
        response.headers_mut().insert(name.clone(), value.clone());
    }

    *response.body_mut() = match payload {
        BridgeBody::Json(value) => Body::from(serde_json::to_vec(&value)?),
        BridgeBody::Text(text) => Body::from(text),
        BridgeBody::Binary(bytes) => Body::from(bytes),
    };

    Ok(response)
}

/// Select the body representation by declared content type.
///
/// JSON is parsed so the platform re-encodes it (no double encoding); `text/*`
/// is decoded; anything else, including an absent content type or an empty
/// body, falls through to raw bytes.
pub fn branch_body(upstream: &AuthResponse) -> Result<BridgeBody> {
    let content_type = upstream.content_type();

    if content_type.contains("application/json") {
        let value = serde_json::from_slice(&upstream.body).map_err(|e| {
            GatewayError::Translation(format!("auth handler sent invalid JSON: {e}"))
        })?;
        return Ok(BridgeBody::Json(value));
    }

    if content_type.starts_with("text/") {
        return Ok(BridgeBody::Text(
            String::from_utf8_lossy(&upstream.body).into_owned(),
        ));
    }

    Ok(BridgeBody::Binary(upstream.body.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, StatusCode};
    use bytes::Bytes;

    fn response_with(content_type: Option<&str>, body: &'static [u8]) -> AuthResponse {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        AuthResponse {
            status: StatusCode::OK,
            headers,
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn json_content_type_is_parsed() {
        let body = branch_body(&response_with(
            Some("application/json; charset=utf-8"),
            br#"{"ok":true}"#,
        ))
        .unwrap();
        assert_eq!(body, BridgeBody::Json(serde_json::json!({"ok": true})));
    }

    #[test]
    fn text_content_type_is_decoded() {
        let body = branch_body(&response_with(Some("text/plain"), b"hello")).unwrap();
        assert_eq!(body, BridgeBody::Text("hello".to_string()));
    }

    #[test]
    fn unknown_content_type_falls_back_to_bytes() {
        let body = branch_body(&response_with(
            Some("application/octet-stream"),
            b"\x00\x01",
        ))
        .unwrap();
        assert_eq!(body, BridgeBody::Binary(Bytes::from_static(b"\x00\x01")));
    }

    #[test]
    fn absent_content_type_with_empty_body_is_empty_bytes() {
        let body = branch_body(&response_with(None, b"")).unwrap();
        assert_eq!(body, BridgeBody::Binary(Bytes::new()));
    }

    #[test]
    fn declared_json_that_does_not_parse_is_an_error() {
        let result = branch_body(&response_with(Some("application/json"), b"not json"));
        assert!(matches!(result, Err(GatewayError::Translation(_))));
    }
}
