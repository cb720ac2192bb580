use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Generation itself cannot fail, so the only errors are requests rejected
/// before a handler runs. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body was not the expected JSON document.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidBody(rejection) => {
                let code = match rejection {
                    JsonRejection::JsonDataError(_) => "VALIDATION_ERROR",
                    JsonRejection::MissingJsonContentType(_) => "UNSUPPORTED_MEDIA_TYPE",
                    _ => "BAD_REQUEST",
                };
                tracing::debug!(error = %rejection, code, "Rejected request body");
                (rejection.status(), code, rejection.body_text())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
