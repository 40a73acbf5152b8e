use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::dtos::DataStatsDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataLoaderStatus {
    Healthy,
    NotLoaded,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServicesDto {
    pub data_loader: DataLoaderStatus,
}

/// Health report; `degraded` while no data is loaded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub services: ServicesDto,
    pub version: String,
    #[schema(example = "3h25m7s")]
    pub uptime: String,
}

/// Dataset statistics plus process information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsResponseDto {
    #[serde(flatten)]
    pub data: DataStatsDto,
    pub uptime: String,
    pub version: String,
}

/// Root description of the service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoDto {
    pub service: String,
    pub version: String,
    pub status: String,
    pub time: DateTime<Utc>,
    pub endpoints: BTreeMap<String, String>,
}
