//! Service-level routes mounted at the root: the banner and health check.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Message returned by `GET /`.
pub const RUNNING_MESSAGE: &str = "DCX Planning Coach API is running";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when both stores answer, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the project database is reachable.
    pub db_healthy: bool,
    /// Whether the records database is reachable.
    pub records_healthy: bool,
}

/// GET / -- liveness banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: RUNNING_MESSAGE,
    })
}

/// GET /health -- checks the project and records pools.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = dcx_db::health_check(&state.pool).await.is_ok();
    let records_healthy = dcx_db::health_check(&state.records_pool).await.is_ok();

    if !records_healthy {
        tracing::warn!("Records database health check failed");
    }

    Json(HealthResponse {
        status: if db_healthy && records_healthy {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        records_healthy,
    })
}

/// Root-level routes, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
