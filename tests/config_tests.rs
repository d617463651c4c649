// Configuration loading tests

use authgate::config::AppConfig;
use std::path::Path;

#[test]
fn default_config_values() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert!(config.server.cors_origins.is_empty());

    assert_eq!(config.auth.path_prefix, "/api/auth");
    assert_eq!(config.auth.max_body_bytes, 1024 * 1024);
    assert!(config.auth.trust_forwarded);
    assert_eq!(config.auth.default_scheme, "http");

    assert_eq!(config.upstream.base_url, "http://127.0.0.1:3000");
    assert_eq!(config.upstream.timeout_seconds, 30);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
    assert!(config.logging.sanitize_headers);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 9999

[upstream]
base_url = "http://auth.internal:4000"

[logging]
format = "json"
"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.server.port, 9999);
    assert_eq!(config.upstream.base_url, "http://auth.internal:4000");
    assert_eq!(config.logging.format, "json");

    // Untouched sections keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.auth.path_prefix, "/api/auth");
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/authgate.toml")));
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = AppConfig::default();
    let rendered = toml::to_string_pretty(&config).unwrap();
    let reparsed: AppConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(reparsed.server.port, config.server.port);
    assert_eq!(reparsed.upstream.base_url, config.upstream.base_url);
}
