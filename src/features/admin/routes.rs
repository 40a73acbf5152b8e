use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::post, Router};

use crate::core::middleware::admin_auth_middleware;
use crate::features::admin::handlers;
use crate::features::admin::services::AdminAuth;
use crate::features::regions::RegionService;

/// Create admin routes (all behind the admin token check)
pub fn routes(region_service: Arc<RegionService>, auth: Arc<AdminAuth>) -> Router {
    Router::new()
        .route("/reload", post(handlers::reload_data))
        .route_layer(from_fn_with_state(auth, admin_auth_middleware))
        .with_state(region_service)
}
