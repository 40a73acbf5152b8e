use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Provinces
        regions_handlers::list_provinces,
        regions_handlers::list_province_types,
        regions_handlers::get_province,
        regions_handlers::list_wards_by_province,
        // Wards
        regions_handlers::list_wards,
        regions_handlers::list_ward_types,
        regions_handlers::get_ward,
        // Search & address
        regions_handlers::global_search,
        regions_handlers::validate_address,
        // System
        system_handlers::service_info,
        system_handlers::health,
        system_handlers::stats,
        // Admin
        admin_handlers::reload_data,
    ),
    components(
        schemas(
            Meta,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::WardResponseDto,
            regions_dtos::ProvinceSummaryDto,
            regions_dtos::WardDetailResponseDto,
            regions_dtos::GlobalSearchResponseDto,
            regions_dtos::ValidateAddressDto,
            regions_dtos::AddressValidationResponseDto,
            regions_dtos::DataStatsDto,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<Vec<regions_dtos::WardResponseDto>>,
            ApiResponse<regions_dtos::WardDetailResponseDto>,
            ApiResponse<regions_dtos::GlobalSearchResponseDto>,
            ApiResponse<regions_dtos::AddressValidationResponseDto>,
            ApiResponse<Vec<String>>,
            // System
            system_dtos::HealthStatus,
            system_dtos::DataLoaderStatus,
            system_dtos::ServicesDto,
            system_dtos::HealthResponseDto,
            system_dtos::StatsResponseDto,
            system_dtos::ServiceInfoDto,
            ApiResponse<system_dtos::HealthResponseDto>,
            ApiResponse<system_dtos::StatsResponseDto>,
            ApiResponse<system_dtos::ServiceInfoDto>,
            // Admin
            admin_dtos::ReloadResponseDto,
            ApiResponse<admin_dtos::ReloadResponseDto>,
        )
    ),
    tags(
        (name = "provinces", description = "Provinces and cities (tỉnh / thành phố)"),
        (name = "wards", description = "Wards, communes and special zones (phường / xã / đặc khu)"),
        (name = "search", description = "Search across provinces and wards"),
        (name = "address", description = "Province/ward address validation"),
        (name = "system", description = "Health, statistics and service information"),
        (name = "admin", description = "Maintenance endpoints (admin token)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Vietnam Administrative API",
        description = "Vietnamese provinces and wards: lookup, search and address validation",
    )
)]
pub struct ApiDoc;

/// Adds the admin bearer token scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
