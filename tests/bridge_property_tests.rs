// Property tests for the inbound conversion

use authgate::bridge::build_auth_request;
use authgate::config::AuthConfig;
use axum::http::request::Parts;
use axum::http::{Method, Request};
use bytes::Bytes;
use proptest::prelude::*;

fn parts_with(entries: &[(String, String)]) -> Parts {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/sign-in")
        .header("host", "gateway.local");
    for (name, value) in entries {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let (parts, ()) = builder.body(()).unwrap().into_parts();
    parts
}

proptest! {
    // Two structurally identical platform requests must convert to identical
    // envelopes; nothing mutable leaks between invocations.
    #[test]
    fn inbound_conversion_is_idempotent(
        entries in proptest::collection::vec(
            ("[a-z][a-z0-9-]{0,15}", "[!-~]{0,32}"),
            0..8,
        ),
        body in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let config = AuthConfig::default();
        let bytes = Bytes::from(body);

        let first = build_auth_request(&parts_with(&entries), Some(bytes.clone()), &config).unwrap();
        let second = build_auth_request(&parts_with(&entries), Some(bytes), &config).unwrap();

        prop_assert_eq!(first, second);
    }

    // Every supplied header entry must appear in the envelope, with per-key
    // order preserved.
    #[test]
    fn inbound_conversion_keeps_every_header_entry(
        entries in proptest::collection::vec(
            ("[a-z][a-z0-9-]{0,15}", "[!-~]{0,32}"),
            0..8,
        ),
    ) {
        let parts = parts_with(&entries);
        let envelope = build_auth_request(&parts, None, &AuthConfig::default()).unwrap();

        prop_assert_eq!(envelope.headers.len(), parts.headers.len());
        for (name, _) in &entries {
            let expected: Vec<_> = parts.headers.get_all(name.as_str()).iter().collect();
            let actual: Vec<_> = envelope.headers.get_all(name.as_str()).iter().collect();
            prop_assert_eq!(expected, actual);
        }
    }
}
