use axum::Json;

use chatter_types::api::HealthResponse;

pub const WELCOME: &str =
    "Welcome to the Chat Application API! Try accessing /messages to see all messages.";

/// GET / — plain-text pointer to the API.
pub async fn welcome() -> &'static str {
    WELCOME
}

/// GET /health — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
