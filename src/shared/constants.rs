/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Maximum page size allowed; larger values fall back to the default
pub const MAX_PAGE_SIZE: usize = 1000;

/// Default number of hits per kind for global search
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Maximum number of hits per kind for global search
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Shortest accepted global search query, in characters
pub const MIN_SEARCH_QUERY_CHARS: usize = 2;

/// Service version reported by health and stats endpoints
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name shown at the root endpoint
pub const SERVICE_NAME: &str = "Vietnam Administrative API";
