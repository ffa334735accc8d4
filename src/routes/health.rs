use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// The store is in-process, so being up is being ready.
pub async fn ready() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ready"})))
}
