use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const LIVENESS_MESSAGE: &str = "Backend server is running successfully 🚀";

pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}
