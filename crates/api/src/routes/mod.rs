pub mod health;
pub mod project;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                    list, create
/// /projects/{project_id}       get, partial update
///
/// /clients                     read-only records listing
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/clients", records::router())
}
