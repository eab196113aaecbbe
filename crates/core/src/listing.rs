//! Listing limits and pagination helpers.

use crate::error::CoreError;

/// Default number of projects returned by a listing.
pub const DEFAULT_PROJECT_LIMIT: i64 = 50;

/// Smallest accepted project listing limit.
pub const MIN_PROJECT_LIMIT: i64 = 1;

/// Largest accepted project listing limit.
pub const MAX_PROJECT_LIMIT: i64 = 200;

/// Default page size for the records listing.
pub const DEFAULT_RECORDS_LIMIT: i64 = 100;

/// Maximum page size for the records listing.
pub const MAX_RECORDS_LIMIT: i64 = 1_000;

/// Resolve the project listing limit: default when absent, rejected when
/// outside `[MIN_PROJECT_LIMIT, MAX_PROJECT_LIMIT]`.
pub fn validate_project_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_PROJECT_LIMIT);
    if !(MIN_PROJECT_LIMIT..=MAX_PROJECT_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between {MIN_PROJECT_LIMIT} and {MAX_PROJECT_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Treat an empty search string the same as no search at all.
pub fn non_empty_query(query: Option<String>) -> Option<String> {
    query.filter(|q| !q.is_empty())
}
