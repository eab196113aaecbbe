//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Offset pagination parameters (`?skip=&limit=`).
///
/// Values are clamped by the handler via `clamp_offset` / `clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct SkipLimitParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
