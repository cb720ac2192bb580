//! Handler for the hyper-generate endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use hypergen_core::generation::{self, GenerationBundle};

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/hyper-generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-form prompt; blank prompts fall back to a default.
    pub prompt: String,
}

// ---------------------------------------------------------------------------
// POST /api/hyper-generate
// ---------------------------------------------------------------------------

/// Build the artifact bundle for a prompt.
///
/// Malformed bodies are rejected as [`crate::error::AppError::InvalidBody`]
/// before any generation runs.
pub async fn hyper_generate(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<GenerationBundle>> {
    let Json(body) = payload?;

    let bundle = generation::hyper_generate(&body.prompt);

    tracing::debug!(
        prompt_len = bundle.prompt.chars().count(),
        svg_bytes = bundle.image_svg.len(),
        "Generated hyper bundle"
    );

    Ok(Json(bundle))
}
