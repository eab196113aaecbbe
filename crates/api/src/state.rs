use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: pools are reference-counted handles and the config is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Pool for the `projects` table.
    pub pool: dcx_db::DbPool,
    /// Pool for the read-only records table; may be the same database.
    pub records_pool: dcx_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
