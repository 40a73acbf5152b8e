use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::core::error::Result;
use crate::features::admin::dtos::ReloadResponseDto;
use crate::features::regions::RegionService;
use crate::shared::types::ApiResponse;

/// Reload provinces and wards from their files
///
/// On failure the previously loaded data keeps being served.
#[utoipa::path(
    post,
    path = "/api/v1/admin/reload",
    responses(
        (status = 200, description = "Data reloaded", body = ApiResponse<ReloadResponseDto>),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Failed to reload data")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn reload_data(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<ReloadResponseDto>>> {
    let stats = service.reload().await?;

    Ok(Json(ApiResponse::success(
        Some(ReloadResponseDto {
            reload_time: Utc::now(),
            stats: stats.into(),
        }),
        Some("Data reloaded successfully".to_string()),
        None,
    )))
}
