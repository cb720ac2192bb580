//! Route definitions for content generation.
//!
//! ```text
//! POST   /hyper-generate      hyper_generate
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Generation routes -- merged into `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/hyper-generate", post(generate::hyper_generate))
}
