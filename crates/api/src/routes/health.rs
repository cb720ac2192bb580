use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use hypergen_core::diagnostics::{build_report, DiagnosticReport, MAX_LISTED_COLLECTIONS};

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable; `null` when none is configured.
    pub db_healthy: Option<bool>,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.db.pool() {
        Some(pool) => Some(hypergen_db::health_check(pool).await.is_ok()),
        None => None,
    };

    let status = if db_healthy == Some(false) {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /test -- backend and database diagnostics.
///
/// Always answers 200; database problems are reported as status text.
async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let probe = state.db.probe(MAX_LISTED_COLLECTIONS).await;
    let report = build_report(probe, state.config.env_presence());

    tracing::debug!(
        database = %report.database,
        collections = report.collections.len(),
        "Diagnostics probe complete"
    );

    Json(report)
}

/// Mount health and diagnostics routes (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/test", get(diagnostics))
}
