use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

/// Pagination details for list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub pages: usize,
}

impl Meta {
    pub fn new(total: usize, page: PageRequest) -> Self {
        Self {
            total,
            limit: page.limit,
            offset: page.offset,
            pages: total_pages(total, page.limit),
        }
    }
}

/// Number of pages needed to show `total` items `limit` at a time
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Parse a raw query value, falling back to `default` when it is missing,
/// empty, not a number or outside `range`
pub fn parse_bounded(raw: Option<&str>, range: RangeInclusive<usize>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| range.contains(v))
        .unwrap_or(default)
}

/// Limit/offset window resolved from raw query parameters.
///
/// Malformed or out-of-range values fall back to the defaults instead of
/// being rejected: `limit` must be in `1..=MAX_PAGE_SIZE`, `offset` must be
/// a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: parse_bounded(limit, 1..=MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE),
            offset: parse_bounded(offset, 0..=usize::MAX, 0),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
