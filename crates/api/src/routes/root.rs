use axum::routing::get;
use axum::Router;

use crate::handlers::greeting;
use crate::state::AppState;

/// Root greeting, mounted at the top level.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting::root))
}
