use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::system::handlers;
use crate::features::system::services::SystemService;

/// Status routes under the API prefix
pub fn routes(service: Arc<SystemService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        .with_state(service)
}

/// Status routes mounted at the server root
pub fn root_routes(service: Arc<SystemService>) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .with_state(service)
}
