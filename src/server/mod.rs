//! Axum-based HTTP server implementation for the authgate bridge.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and handling incoming requests on the wildcard auth path. It
//! bridges these requests to the external authentication service.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (auth bridge, health, metrics).
//! - `middleware`: Custom tower/axum middleware for request ID tracking and CORS.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
