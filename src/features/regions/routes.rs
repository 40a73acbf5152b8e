use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature, relative to the API prefix
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        // Province routes
        .route("/provinces", get(handlers::list_provinces))
        .route("/provinces/types", get(handlers::list_province_types))
        .route("/provinces/{code}", get(handlers::get_province))
        .route(
            "/provinces/{code}/wards",
            get(handlers::list_wards_by_province),
        )
        // Ward routes
        .route("/wards", get(handlers::list_wards))
        .route("/wards/types", get(handlers::list_ward_types))
        .route("/wards/{code}", get(handlers::get_ward))
        // Cross-entity routes
        .route("/search", get(handlers::global_search))
        .route("/address/validate", post(handlers::validate_address))
        .with_state(service)
}
