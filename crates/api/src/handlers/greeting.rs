use axum::Json;
use serde::Serialize;

/// `{"message": ...}` greeting payload.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Hello from FastAPI Backend!",
    })
}

/// GET /api/hello
pub async fn api_hello() -> Json<Message> {
    Json(Message {
        message: "Hello from the backend API!",
    })
}
