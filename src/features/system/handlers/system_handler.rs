use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::features::system::dtos::{
    HealthResponseDto, HealthStatus, ServiceInfoDto, StatsResponseDto,
};
use crate::features::system::services::SystemService;
use crate::shared::types::ApiResponse;

/// Service health; answers 503 while no data is loaded
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = ApiResponse<HealthResponseDto>),
        (status = 503, description = "Service is degraded", body = ApiResponse<HealthResponseDto>)
    ),
    tag = "system"
)]
pub async fn health(
    State(service): State<Arc<SystemService>>,
) -> (StatusCode, Json<ApiResponse<HealthResponseDto>>) {
    let health = service.health().await;
    let status = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(ApiResponse::success(Some(health), None, None)))
}

/// Dataset statistics with uptime and version
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (status = 200, description = "Current statistics", body = ApiResponse<StatsResponseDto>),
        (status = 503, description = "Data not loaded")
    ),
    tag = "system"
)]
pub async fn stats(
    State(service): State<Arc<SystemService>>,
) -> Result<Json<ApiResponse<StatsResponseDto>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Service description and endpoint map
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description", body = ApiResponse<ServiceInfoDto>)
    ),
    tag = "system"
)]
pub async fn service_info(
    State(service): State<Arc<SystemService>>,
) -> Json<ApiResponse<ServiceInfoDto>> {
    Json(ApiResponse::success(Some(service.info()), None, None))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
