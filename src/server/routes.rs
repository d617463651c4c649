// HTTP routes configuration

use super::handlers::{auth_handler, health_handler, metrics_handler};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::upstream::AuthClient;
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub auth_client: Arc<AuthClient>,
}

pub fn create_router(config: AppConfig, auth_client: AuthClient) -> Result<Router> {
    let cors = cors_layer(&config.server.cors_origins);
    let wildcard = format!("{}/*path", config.auth.path_prefix.trim_end_matches('/'));

    let state = AppState {
        config,
        auth_client: Arc::new(auth_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route(&wildcard, any(auth_handler))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    if let Some(cors) = cors {
        app = app.layer(cors);
    }

    Ok(app)
}
