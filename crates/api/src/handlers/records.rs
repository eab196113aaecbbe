//! Handler for the read-only records listing.

use axum::extract::State;
use axum::Json;
use dcx_core::listing::{clamp_limit, clamp_offset, DEFAULT_RECORDS_LIMIT, MAX_RECORDS_LIMIT};
use dcx_db::models::record::Record;
use dcx_db::repositories::RecordRepo;

use crate::error::AppResult;
use crate::extract::ValidQuery;
use crate::query::SkipLimitParams;
use crate::state::AppState;

/// GET /api/v1/clients
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SkipLimitParams>,
) -> AppResult<Json<Vec<Record>>> {
    let skip = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_RECORDS_LIMIT, MAX_RECORDS_LIMIT);

    let records =
        RecordRepo::list(&state.records_pool, &state.config.records_table, skip, limit).await?;
    Ok(Json(records))
}
