use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::features::regions::models::{Province, Ward};
use crate::features::regions::services::region_query;

/// Errors raised while reading the administrative data files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Data file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Locations of the two source documents
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub provinces: PathBuf,
    pub wards: PathBuf,
}

/// The complete dataset as of the last successful load.
///
/// Provinces and wards are keyed by the keys of their source documents.
/// `loaded_at` is `None` until the first load succeeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub provinces: HashMap<String, Province>,
    pub wards: HashMap<String, Ward>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn is_ready(&self) -> bool {
        !self.provinces.is_empty() && !self.wards.is_empty()
    }

    pub fn stats(&self) -> DataStats {
        DataStats {
            provinces: self.provinces.len(),
            wards: self.wards.len(),
            load_time: self.loaded_at,
            is_loaded: self.is_ready(),
            province_types: region_query::count_by_type(self.provinces.values()),
            ward_types: region_query::count_by_type(self.wards.values()),
        }
    }
}

/// Summary of the current snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DataStats {
    pub provinces: usize,
    pub wards: usize,
    pub load_time: Option<DateTime<Utc>>,
    pub is_loaded: bool,
    pub province_types: BTreeMap<String, usize>,
    pub ward_types: BTreeMap<String, usize>,
}

/// In-memory store holding the administrative dataset.
///
/// Readers share the lock for the whole duration of a query. Loading parses
/// both files before the exclusive lock is taken, so writers only hold it
/// for the swap and a failed load never touches the current snapshot.
pub struct RegionStore {
    paths: DataPaths,
    snapshot: RwLock<Snapshot>,
}

impl RegionStore {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            snapshot: RwLock::new(Snapshot::default()),
        }
    }

    /// Load both documents and replace the current snapshot as one unit
    pub async fn load(&self, provinces_path: &Path, wards_path: &Path) -> Result<(), LoadError> {
        tracing::info!(
            "Loading administrative data from {} and {}",
            provinces_path.display(),
            wards_path.display()
        );
        let started = Instant::now();

        let provinces: HashMap<String, Province> =
            read_json(provinces_path).await.inspect_err(|e| {
                tracing::error!("Failed to load provinces: {}", e);
            })?;
        let wards: HashMap<String, Ward> = read_json(wards_path).await.inspect_err(|e| {
            tracing::error!("Failed to load wards: {}", e);
        })?;

        let fresh = Snapshot {
            provinces,
            wards,
            loaded_at: Some(Utc::now()),
        };
        let (province_count, ward_count) = (fresh.provinces.len(), fresh.wards.len());

        let previous = {
            let mut guard = self.snapshot.write().await;
            std::mem::replace(&mut *guard, fresh)
        };
        // Released after the write guard
        drop(previous);

        tracing::info!(
            "Data loaded successfully in {:?} - provinces: {}, wards: {}",
            started.elapsed(),
            province_count,
            ward_count
        );

        Ok(())
    }

    /// Re-read the configured files
    pub async fn reload(&self) -> Result<(), LoadError> {
        tracing::info!("Reloading administrative data");
        self.load(&self.paths.provinces, &self.paths.wards).await
    }

    /// Acquire shared access to the current snapshot
    pub async fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().await
    }

    pub async fn is_ready(&self) -> bool {
        self.snapshot.read().await.is_ready()
    }

    pub async fn stats(&self) -> DataStats {
        self.snapshot.read().await.stats()
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
