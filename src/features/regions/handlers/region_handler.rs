use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::regions::dtos::{
    AddressValidationResponseDto, GlobalSearchQuery, GlobalSearchResponseDto,
    ProvinceListQuery, ProvinceResponseDto, ValidateAddressDto, WardDetailResponseDto,
    WardListQuery, WardResponseDto,
};
use crate::features::regions::services::{RegionService, SearchFilter, SearchScope};
use crate::shared::constants::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, MIN_SEARCH_QUERY_CHARS};
use crate::shared::types::{parse_bounded, ApiResponse, Meta};

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

// ==================== Province Handlers ====================

/// List provinces with optional search, type filter and pagination
#[utoipa::path(
    get,
    path = "/api/v1/provinces",
    params(ProvinceListQuery),
    responses(
        (status = 200, description = "Page of provinces sorted by name", body = ApiResponse<Vec<ProvinceResponseDto>>),
        (status = 503, description = "Data not loaded")
    ),
    tag = "provinces"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<ProvinceListQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let page = query.page();
    let filter = SearchFilter {
        query: trimmed(&query.search),
        unit_type: trimmed(&query.unit_type),
        ..Default::default()
    };

    let result = service
        .search_provinces(filter, page.limit, page.offset)
        .await?;
    let dtos: Vec<ProvinceResponseDto> = result.items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta::new(result.total, page)),
    )))
}

/// List the distinct province types
#[utoipa::path(
    get,
    path = "/api/v1/provinces/types",
    responses(
        (status = 200, description = "Sorted province types", body = ApiResponse<Vec<String>>),
        (status = 503, description = "Data not loaded")
    ),
    tag = "provinces"
)]
pub async fn list_province_types(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let types = service.list_province_types().await?;
    Ok(Json(ApiResponse::success(Some(types), None, None)))
}

/// Get a province by code
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{code}",
    params(
        ("code" = String, Path, description = "Province code (2 digits)")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found"),
        (status = 503, description = "Data not loaded")
    ),
    tag = "provinces"
)]
pub async fn get_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province = service.get_province_by_code(&code).await?;
    Ok(Json(ApiResponse::success(
        Some(province.into()),
        None,
        None,
    )))
}

/// List wards in a province
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{code}/wards",
    params(
        ("code" = String, Path, description = "Province code (2 digits)"),
        ProvinceListQuery
    ),
    responses(
        (status = 200, description = "Page of wards in the province", body = ApiResponse<Vec<WardResponseDto>>),
        (status = 404, description = "Province not found"),
        (status = 503, description = "Data not loaded")
    ),
    tag = "provinces"
)]
pub async fn list_wards_by_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
    AppQuery(query): AppQuery<ProvinceListQuery>,
) -> Result<Json<ApiResponse<Vec<WardResponseDto>>>> {
    let page = query.page();
    let filter = SearchFilter {
        query: trimmed(&query.search),
        unit_type: trimmed(&query.unit_type),
        ..Default::default()
    };

    let result = service
        .list_wards_by_province_code(&code, filter, page.limit, page.offset)
        .await?;
    let dtos: Vec<WardResponseDto> = result.items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta::new(result.total, page)),
    )))
}

// ==================== Ward Handlers ====================

/// List wards with optional search, type and province filters
#[utoipa::path(
    get,
    path = "/api/v1/wards",
    params(WardListQuery),
    responses(
        (status = 200, description = "Page of wards sorted by name", body = ApiResponse<Vec<WardResponseDto>>),
        (status = 503, description = "Data not loaded")
    ),
    tag = "wards"
)]
pub async fn list_wards(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<WardListQuery>,
) -> Result<Json<ApiResponse<Vec<WardResponseDto>>>> {
    let page = query.page();
    let filter = SearchFilter {
        query: trimmed(&query.search),
        unit_type: trimmed(&query.unit_type),
        parent_code: trimmed(&query.province_code),
    };

    let result = service
        .search_wards(filter, page.limit, page.offset)
        .await?;
    let dtos: Vec<WardResponseDto> = result.items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta::new(result.total, page)),
    )))
}

/// List the distinct ward types
#[utoipa::path(
    get,
    path = "/api/v1/wards/types",
    responses(
        (status = 200, description = "Sorted ward types", body = ApiResponse<Vec<String>>),
        (status = 503, description = "Data not loaded")
    ),
    tag = "wards"
)]
pub async fn list_ward_types(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let types = service.list_ward_types().await?;
    Ok(Json(ApiResponse::success(Some(types), None, None)))
}

/// Get a ward by code, together with its province
#[utoipa::path(
    get,
    path = "/api/v1/wards/{code}",
    params(
        ("code" = String, Path, description = "Ward code (5 digits)")
    ),
    responses(
        (status = 200, description = "Ward details", body = ApiResponse<WardDetailResponseDto>),
        (status = 404, description = "Ward not found"),
        (status = 503, description = "Data not loaded")
    ),
    tag = "wards"
)]
pub async fn get_ward(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<WardDetailResponseDto>>> {
    let detail = service.get_ward_with_province(&code).await?;
    Ok(Json(ApiResponse::success(Some(detail.into()), None, None)))
}

// ==================== Search Handlers ====================

/// Search provinces and wards at once
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(GlobalSearchQuery),
    responses(
        (status = 200, description = "Matching provinces and wards", body = ApiResponse<GlobalSearchResponseDto>),
        (status = 400, description = "Query too short or unknown entity"),
        (status = 503, description = "Data not loaded")
    ),
    tag = "search"
)]
pub async fn global_search(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<GlobalSearchQuery>,
) -> Result<Json<ApiResponse<GlobalSearchResponseDto>>> {
    let search_term = trimmed(&query.q);
    if search_term.chars().count() < MIN_SEARCH_QUERY_CHARS {
        return Err(AppError::BadRequest(format!(
            "Search query must be at least {} characters",
            MIN_SEARCH_QUERY_CHARS
        )));
    }

    let scope = match trimmed(&query.entity) {
        "" => SearchScope::All,
        entity => entity.parse::<SearchScope>().map_err(AppError::BadRequest)?,
    };

    let limit = parse_bounded(
        query.limit.as_deref(),
        1..=MAX_SEARCH_LIMIT,
        DEFAULT_SEARCH_LIMIT,
    );

    let result = service.global_search(search_term, scope, limit).await?;
    Ok(Json(ApiResponse::success(
        Some(GlobalSearchResponseDto::new(search_term.to_string(), result)),
        None,
        None,
    )))
}

/// Check that a ward belongs to a province
#[utoipa::path(
    post,
    path = "/api/v1/address/validate",
    request_body = ValidateAddressDto,
    responses(
        (status = 200, description = "Validation outcome", body = ApiResponse<AddressValidationResponseDto>),
        (status = 400, description = "Invalid request body"),
        (status = 503, description = "Data not loaded")
    ),
    tag = "address"
)]
pub async fn validate_address(
    State(service): State<Arc<RegionService>>,
    AppJson(dto): AppJson<ValidateAddressDto>,
) -> Result<Json<ApiResponse<AddressValidationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ward = service
        .validate_address(&dto.province_code, &dto.ward_code)
        .await?;

    let message = if ward.is_some() {
        "Address is valid"
    } else {
        "Invalid address combination"
    };
    Ok(Json(ApiResponse::success(
        Some(ward.into()),
        Some(message.to_string()),
        None,
    )))
}
