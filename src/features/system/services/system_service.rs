use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::regions::RegionService;
use crate::features::system::dtos::{
    DataLoaderStatus, HealthResponseDto, HealthStatus, ServiceInfoDto, ServicesDto,
    StatsResponseDto,
};
use crate::shared::constants::{SERVICE_NAME, SERVICE_VERSION};

/// Reports process and dataset status
pub struct SystemService {
    region_service: Arc<RegionService>,
    started_at: Instant,
}

impl SystemService {
    pub fn new(region_service: Arc<RegionService>) -> Self {
        Self {
            region_service,
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub async fn health(&self) -> HealthResponseDto {
        let (status, data_loader) = if self.region_service.is_ready().await {
            (HealthStatus::Healthy, DataLoaderStatus::Healthy)
        } else {
            (HealthStatus::Degraded, DataLoaderStatus::NotLoaded)
        };

        HealthResponseDto {
            status,
            timestamp: Utc::now(),
            services: ServicesDto { data_loader },
            version: SERVICE_VERSION.to_string(),
            uptime: format_uptime(self.uptime()),
        }
    }

    pub async fn stats(&self) -> Result<StatsResponseDto> {
        let stats = self.region_service.stats().await;
        if !stats.is_loaded {
            return Err(AppError::ServiceUnavailable("Data not loaded".to_string()));
        }

        Ok(StatsResponseDto {
            data: stats.into(),
            uptime: format_uptime(self.uptime()),
            version: SERVICE_VERSION.to_string(),
        })
    }

    pub fn info(&self) -> ServiceInfoDto {
        let endpoints = [
            ("health", "/api/v1/health"),
            ("stats", "/api/v1/stats"),
            ("provinces", "/api/v1/provinces"),
            ("wards", "/api/v1/wards"),
            ("search", "/api/v1/search"),
            ("validate", "/api/v1/address/validate"),
            ("docs", "/swagger-ui"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect::<BTreeMap<_, _>>();

        ServiceInfoDto {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            status: "running".to_string(),
            time: Utc::now(),
            endpoints,
        }
    }
}

/// Render a duration as `1h2m3s`, dropping leading zero units
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        loaded_service, unloaded_service, TempDataset, PROVINCES_JSON, WARDS_JSON,
    };

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
        assert_eq!(format_uptime(Duration::from_millis(59_900)), "59s");
        assert_eq!(format_uptime(Duration::from_secs(61)), "1m1s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "25h1m1s");
    }

    #[tokio::test]
    async fn test_health_tracks_data_readiness() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);

        let system = SystemService::new(unloaded_service(&dataset));
        let health = system.health().await;
        assert_eq!(health.status, HealthStatus::Degraded);
        assert_eq!(health.services.data_loader, DataLoaderStatus::NotLoaded);

        let system = SystemService::new(loaded_service(&dataset).await);
        let health = system.health().await;
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.version, SERVICE_VERSION);
    }

    #[tokio::test]
    async fn test_stats_require_loaded_data() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);

        let system = SystemService::new(unloaded_service(&dataset));
        assert!(matches!(
            system.stats().await,
            Err(AppError::ServiceUnavailable(_))
        ));

        let system = SystemService::new(loaded_service(&dataset).await);
        let stats = system.stats().await.unwrap();
        assert_eq!(stats.data.provinces, 3);
        assert_eq!(stats.data.wards, 5);
        assert_eq!(stats.data.ward_types.get("xã"), Some(&1));
    }

    #[test]
    fn test_info_lists_endpoints() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let system = SystemService::new(unloaded_service(&dataset));

        let info = system.info();
        assert_eq!(info.status, "running");
        assert_eq!(
            info.endpoints.get("validate").map(String::as_str),
            Some("/api/v1/address/validate")
        );
    }
}
