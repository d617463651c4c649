//! Configuration data structures for the authgate gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the bridged auth route, the upstream auth service connection and
//! logging output.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers, CORS).
    #[serde(default)]
    pub server: ServerConfig,

    /// Bridged auth route settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Upstream auth service connection settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads for the Axum server.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Origins allowed to call the gateway cross-site. `*` allows any origin
    /// (without credentials); an empty list disables CORS handling.
    /// Default: empty
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Settings for the bridged auth route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path prefix the wildcard auth route is mounted under.
    /// Default: `/api/auth`
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Maximum request body size read for body-bearing methods, in bytes.
    /// Default: `1048576` (1 MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Whether to honor `x-forwarded-proto`/`x-forwarded-host` when
    /// reconstructing the absolute request URL.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub trust_forwarded: bool,

    /// Scheme assumed when no forwarded or request-target scheme is present.
    /// Default: `http`
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
}

/// Settings for the upstream auth service connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the authentication service requests are bridged to.
    /// Default: `http://127.0.0.1:3000`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    /// Default: `30`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds.
    /// Default: `10`
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Maximum number of idle connections kept per host.
    /// Default: `10`
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle: usize,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to redact credential-bearing header values in logs.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_headers: bool,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
            max_body_bytes: default_max_body_bytes(),
            trust_forwarded: true,
            default_scheme: default_scheme(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            pool_max_idle: default_pool_max_idle(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_headers: true,
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_path_prefix() -> String {
    "/api/auth".to_string()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_true() -> bool {
    true
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_pool_max_idle() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
