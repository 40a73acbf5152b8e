use std::sync::Arc;

use tokio::sync::RwLockReadGuard;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Province, Ward};
use crate::features::regions::services::region_query::{
    self, GlobalSearchResult, Page, SearchFilter, SearchScope,
};
use crate::features::regions::services::region_store::{DataStats, RegionStore, Snapshot};

/// Service for querying Vietnamese administrative units.
///
/// Every query holds the store's read lock until it returns, so a single
/// call never sees two different snapshots.
pub struct RegionService {
    store: Arc<RegionStore>,
}

impl RegionService {
    pub fn new(store: Arc<RegionStore>) -> Self {
        Self { store }
    }

    /// Read guard on a snapshot that has data in it
    async fn ready_snapshot(&self) -> Result<RwLockReadGuard<'_, Snapshot>> {
        let snapshot = self.store.read().await;
        if !snapshot.is_ready() {
            return Err(AppError::ServiceUnavailable("Data not loaded".to_string()));
        }
        Ok(snapshot)
    }

    // ==================== Province Methods ====================

    /// Search provinces with filters and pagination
    pub async fn search_provinces(
        &self,
        filter: SearchFilter<'_>,
        limit: usize,
        offset: usize,
    ) -> Result<Page<Province>> {
        let snapshot = self.ready_snapshot().await?;
        Ok(region_query::search(
            snapshot.provinces.values(),
            &filter,
            limit,
            offset,
        ))
    }

    /// Get a province by its code
    pub async fn get_province_by_code(&self, code: &str) -> Result<Province> {
        let snapshot = self.ready_snapshot().await?;
        snapshot
            .provinces
            .get(code)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Province with code '{}' not found", code)))
    }

    pub async fn list_province_types(&self) -> Result<Vec<String>> {
        let snapshot = self.ready_snapshot().await?;
        Ok(region_query::list_types(snapshot.provinces.values()))
    }

    // ==================== Ward Methods ====================

    /// Search wards with filters and pagination
    pub async fn search_wards(
        &self,
        filter: SearchFilter<'_>,
        limit: usize,
        offset: usize,
    ) -> Result<Page<Ward>> {
        let snapshot = self.ready_snapshot().await?;
        Ok(region_query::search(
            snapshot.wards.values(),
            &filter,
            limit,
            offset,
        ))
    }

    /// List wards of a province; the province must exist
    pub async fn list_wards_by_province_code(
        &self,
        province_code: &str,
        filter: SearchFilter<'_>,
        limit: usize,
        offset: usize,
    ) -> Result<Page<Ward>> {
        let snapshot = self.ready_snapshot().await?;
        if !snapshot.provinces.contains_key(province_code) {
            return Err(AppError::NotFound(format!(
                "Province with code '{}' not found",
                province_code
            )));
        }

        let filter = SearchFilter {
            parent_code: province_code,
            ..filter
        };
        Ok(region_query::search(
            snapshot.wards.values(),
            &filter,
            limit,
            offset,
        ))
    }

    /// Get a ward together with its province, if the province still exists
    pub async fn get_ward_with_province(&self, code: &str) -> Result<(Ward, Option<Province>)> {
        let snapshot = self.ready_snapshot().await?;
        let (ward, province) = region_query::ward_with_province(&snapshot, code)
            .ok_or_else(|| AppError::NotFound(format!("Ward with code '{}' not found", code)))?;

        if province.is_none() {
            tracing::warn!(
                "Ward {} references missing province {}",
                ward.code,
                ward.parent_code
            );
        }

        Ok((ward, province))
    }

    pub async fn list_ward_types(&self) -> Result<Vec<String>> {
        let snapshot = self.ready_snapshot().await?;
        Ok(region_query::list_types(snapshot.wards.values()))
    }

    // ==================== Cross-entity Methods ====================

    /// Search provinces and wards at once, each capped at `limit`
    pub async fn global_search(
        &self,
        query: &str,
        scope: SearchScope,
        limit: usize,
    ) -> Result<GlobalSearchResult> {
        let snapshot = self.ready_snapshot().await?;
        Ok(region_query::global_search(&snapshot, query, scope, limit))
    }

    /// The ward if it belongs to the province, `None` otherwise
    pub async fn validate_address(
        &self,
        province_code: &str,
        ward_code: &str,
    ) -> Result<Option<Ward>> {
        let snapshot = self.ready_snapshot().await?;
        Ok(region_query::validate_address(
            &snapshot,
            province_code,
            ward_code,
        ))
    }

    // ==================== Store Methods ====================

    pub async fn is_ready(&self) -> bool {
        self.store.is_ready().await
    }

    pub async fn stats(&self) -> DataStats {
        self.store.stats().await
    }

    /// Reload both data files; the current data stays in place on failure
    pub async fn reload(&self) -> Result<DataStats> {
        self.store.reload().await?;
        Ok(self.store.stats().await)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::shared::test_helpers::{
        loaded_service, unloaded_service, TempDataset, EXTENDED_PROVINCES_JSON,
        EXTENDED_WARDS_JSON, PROVINCES_JSON, WARDS_JSON,
    };

    #[tokio::test]
    async fn test_queries_fail_while_not_loaded() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let service = unloaded_service(&dataset);

        let err = service.get_province_by_code("01").await.unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
        let err = service
            .search_wards(SearchFilter::default(), 10, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_get_province_by_code() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let service = loaded_service(&dataset).await;

        let province = service.get_province_by_code("79").await.unwrap();
        assert_eq!(province.name, "Hồ Chí Minh");

        let err = service.get_province_by_code("99").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_every_province_code_resolves_to_its_record() {
        let dataset = TempDataset::new(EXTENDED_PROVINCES_JSON, EXTENDED_WARDS_JSON);
        let service = loaded_service(&dataset).await;

        let expected: HashMap<String, Province> =
            serde_json::from_str(EXTENDED_PROVINCES_JSON).unwrap();
        assert_eq!(expected.len(), 4);
        for (code, province) in expected {
            let found = service.get_province_by_code(&code).await.unwrap();
            assert_eq!(found, province);
        }
    }

    #[tokio::test]
    async fn test_list_wards_by_province_code() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let service = loaded_service(&dataset).await;

        let page = service
            .list_wards_by_province_code("01", SearchFilter::default(), 2, 0)
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|w| w.parent_code == "01"));

        let err = service
            .list_wards_by_province_code("02", SearchFilter::default(), 2, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_province_filter_overrides_caller_parent() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let service = loaded_service(&dataset).await;

        let filter = SearchFilter {
            parent_code: "79",
            ..Default::default()
        };
        let page = service
            .list_wards_by_province_code("04", filter, 10, 0)
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].code, "01279");
    }

    #[tokio::test]
    async fn test_get_ward_with_missing_province() {
        let dataset = TempDataset::new(EXTENDED_PROVINCES_JSON, EXTENDED_WARDS_JSON);
        let service = loaded_service(&dataset).await;

        let (ward, province) = service.get_ward_with_province("99999").await.unwrap();
        assert_eq!(ward.parent_code, "96");
        assert!(province.is_none());

        let (_, province) = service.get_ward_with_province("20194").await.unwrap();
        assert_eq!(province.unwrap().name, "Đà Nẵng");
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_serving_old_data() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let service = loaded_service(&dataset).await;

        std::fs::write(dataset.paths().wards, "not json").unwrap();
        let err = service.reload().await.unwrap_err();
        assert!(matches!(err, AppError::DataLoad(_)));

        let (ward, _) = service.get_ward_with_province("00001").await.unwrap();
        assert_eq!(ward.name, "Phúc Xá");
        assert_eq!(service.stats().await.wards, 5);
    }

    #[tokio::test]
    async fn test_reload_picks_up_new_files() {
        let dataset = TempDataset::new(PROVINCES_JSON, WARDS_JSON);
        let service = loaded_service(&dataset).await;

        std::fs::write(dataset.paths().provinces, EXTENDED_PROVINCES_JSON).unwrap();
        std::fs::write(dataset.paths().wards, EXTENDED_WARDS_JSON).unwrap();

        let stats = service.reload().await.unwrap();
        assert_eq!(stats.provinces, 4);
        assert_eq!(stats.wards, 7);
        assert!(service.get_province_by_code("48").await.is_ok());
    }
}
