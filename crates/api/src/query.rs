//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?offset=&limit=`) for list endpoints.
///
/// Bounds are checked by `roster_core::pagination::Page::new`; out-of-range
/// values are rejected, not clamped.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}
