use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::dtos::DataStatsDto;

/// Result of a successful data reload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReloadResponseDto {
    pub reload_time: DateTime<Utc>,
    pub stats: DataStatsDto,
}
