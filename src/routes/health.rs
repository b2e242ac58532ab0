use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the ConcurseiroAI API!",
    }))
}

#[axum::debug_handler]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "message": "API is running.",
        "modelAvailable": state.ai_service.is_available(),
    });
    (StatusCode::OK, Json(body))
}
