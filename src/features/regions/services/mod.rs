pub mod region_query;
mod region_service;
mod region_store;

pub use region_query::{GlobalSearchResult, SearchFilter, SearchScope};
pub use region_service::RegionService;
pub use region_store::{DataPaths, DataStats, LoadError, RegionStore};
