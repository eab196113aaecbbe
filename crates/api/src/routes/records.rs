//! Route definitions for the read-only records listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/clients`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(records::list))
}
