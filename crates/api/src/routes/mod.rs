pub mod generate;
pub mod health;
pub mod root;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                GET   greeting
/// /hyper-generate       POST  generate the full artifact bundle
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::greeting::api_hello))
        .merge(generate::router())
}
