pub mod attempts;
pub mod generation;
pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/", get(health::root))
        .route("/status", get(health::status));

    let api = Router::new()
        .route("/api/questions/generate", post(generation::generate_question))
        .route("/api/questions/batch", post(generation::generate_mock_exam))
        .route("/api/text/transform", post(generation::transform_text))
        .route("/api/attempts", post(attempts::submit_attempt))
        .route("/api/attempts/:id", get(attempts::get_attempt))
        .route("/api/uploads/context", post(upload::upload_context));

    base_routes
        .merge(api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
