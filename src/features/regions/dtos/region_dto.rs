use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::regions::models::{Province, Ward};
use crate::features::regions::services::{DataStats, GlobalSearchResult};
use crate::shared::types::PageRequest;

/// Query parameters for listing provinces
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProvinceListQuery {
    /// Case-insensitive substring match on name, slug and name_with_type
    #[param(example = "hà nội")]
    pub search: Option<String>,
    /// Exact type filter
    #[serde(rename = "type")]
    #[param(example = "thành phố")]
    pub unit_type: Option<String>,
    /// Page size (1-1000, default 50; anything else falls back to the default)
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Number of items to skip (default 0)
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
}

impl ProvinceListQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::from_query(self.limit.as_deref(), self.offset.as_deref())
    }
}

/// Query parameters for listing wards
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WardListQuery {
    /// Case-insensitive substring match on name, slug, name_with_type, path and path_with_type
    #[param(example = "phúc xá")]
    pub search: Option<String>,
    /// Exact type filter
    #[serde(rename = "type")]
    #[param(example = "phường")]
    pub unit_type: Option<String>,
    /// Only wards of this province
    #[param(example = "01")]
    pub province_code: Option<String>,
    /// Page size (1-1000, default 50; anything else falls back to the default)
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Number of items to skip (default 0)
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
}

impl WardListQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::from_query(self.limit.as_deref(), self.offset.as_deref())
    }
}

/// Query parameters for searching provinces and wards together
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GlobalSearchQuery {
    /// Search text, at least 2 characters
    #[param(example = "ba đình")]
    pub q: Option<String>,
    /// One of `all`, `province`, `ward` (default `all`)
    #[param(example = "all")]
    pub entity: Option<String>,
    /// Maximum hits per entity kind (1-100, default 20)
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

/// Request body for address validation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidateAddressDto {
    #[validate(length(min = 1, message = "province_code is required"))]
    #[schema(example = "01")]
    pub province_code: String,

    #[validate(length(min = 1, message = "ward_code is required"))]
    #[schema(example = "00004")]
    pub ward_code: String,
}

/// Response DTO for province data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProvinceResponseDto {
    pub code: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub name_with_type: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            code: province.code,
            name: province.name,
            slug: province.slug,
            unit_type: province.unit_type,
            name_with_type: province.name_with_type,
        }
    }
}

/// Response DTO for ward data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WardResponseDto {
    pub code: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub name_with_type: String,
    pub path: String,
    pub path_with_type: String,
    pub parent_code: String,
}

impl From<Ward> for WardResponseDto {
    fn from(ward: Ward) -> Self {
        Self {
            code: ward.code,
            name: ward.name,
            slug: ward.slug,
            unit_type: ward.unit_type,
            name_with_type: ward.name_with_type,
            path: ward.path,
            path_with_type: ward.path_with_type,
            parent_code: ward.parent_code,
        }
    }
}

/// Province fields embedded in a ward detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProvinceSummaryDto {
    pub code: String,
    pub name: String,
    pub name_with_type: String,
    #[serde(rename = "type")]
    pub unit_type: String,
}

impl From<Province> for ProvinceSummaryDto {
    fn from(province: Province) -> Self {
        Self {
            code: province.code,
            name: province.name,
            name_with_type: province.name_with_type,
            unit_type: province.unit_type,
        }
    }
}

/// Ward with its province; `province` is null when the parent code resolves nowhere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WardDetailResponseDto {
    pub code: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub name_with_type: String,
    pub path: String,
    pub path_with_type: String,
    pub parent_code: String,
    pub province: Option<ProvinceSummaryDto>,
}

impl From<(Ward, Option<Province>)> for WardDetailResponseDto {
    fn from((ward, province): (Ward, Option<Province>)) -> Self {
        Self {
            code: ward.code,
            name: ward.name,
            slug: ward.slug,
            unit_type: ward.unit_type,
            name_with_type: ward.name_with_type,
            path: ward.path,
            path_with_type: ward.path_with_type,
            parent_code: ward.parent_code,
            province: province.map(Into::into),
        }
    }
}

/// Results of a search across provinces and wards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GlobalSearchResponseDto {
    pub query: String,
    pub provinces: Vec<ProvinceResponseDto>,
    pub wards: Vec<WardResponseDto>,
}

impl GlobalSearchResponseDto {
    pub fn new(query: String, result: GlobalSearchResult) -> Self {
        Self {
            query,
            provinces: result.provinces.into_iter().map(Into::into).collect(),
            wards: result.wards.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of an address validation; `ward` is set only when `valid`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressValidationResponseDto {
    pub valid: bool,
    pub ward: Option<WardResponseDto>,
}

impl From<Option<Ward>> for AddressValidationResponseDto {
    fn from(ward: Option<Ward>) -> Self {
        Self {
            valid: ward.is_some(),
            ward: ward.map(Into::into),
        }
    }
}

/// Counts and load state of the current dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataStatsDto {
    pub provinces: usize,
    pub wards: usize,
    /// Time of the last successful load
    pub load_time: Option<DateTime<Utc>>,
    pub is_loaded: bool,
    pub province_types: BTreeMap<String, usize>,
    pub ward_types: BTreeMap<String, usize>,
}

impl From<DataStats> for DataStatsDto {
    fn from(stats: DataStats) -> Self {
        Self {
            provinces: stats.provinces,
            wards: stats.wards,
            load_time: stats.load_time,
            is_loaded: stats.is_loaded,
            province_types: stats.province_types,
            ward_types: stats.ward_types,
        }
    }
}
