use std::sync::Arc;

use hypergen_db::DbHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, fixed at startup.
    pub config: Arc<ServerConfig>,
    /// Optional database, only consulted by the diagnostics routes.
    pub db: DbHandle,
}
