//! Offset/limit bounds for list endpoints.
//!
//! Out-of-range values are rejected rather than clamped, so a client asking
//! for 500 rows learns that it will never get more than [`MAX_PAGE_LIMIT`].

use crate::error::CoreError;

/// Rows returned when the client does not pass `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Largest `limit` a list endpoint accepts.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A validated offset/limit pair, ready to bind into `LIMIT ? OFFSET ?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Page {
    /// Build a page from raw query values, applying defaults for omitted ones.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        let offset = validate_offset(offset)?;
        let limit = validate_limit(limit)?;
        Ok(Self { offset, limit })
    }
}

/// Validate a user-provided limit. `None` yields [`DEFAULT_PAGE_LIMIT`].
pub fn validate_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if !(0..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between 0 and {MAX_PAGE_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}

/// Validate a user-provided offset. `None` yields 0.
pub fn validate_offset(offset: Option<i64>) -> Result<i64, CoreError> {
    let offset = offset.unwrap_or(0);
    if offset < 0 {
        return Err(CoreError::Validation(format!(
            "offset must not be negative, got {offset}"
        )));
    }
    Ok(offset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
