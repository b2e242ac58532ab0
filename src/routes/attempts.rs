use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::attempt_dto::SubmitAttemptPayload;
use crate::error::Result;
use crate::models::attempt::MockExamAttempt;
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_attempt(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAttemptPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let attempt = MockExamAttempt::from(payload);
    let saved = state.attempt_service.save_attempt(&attempt).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[axum::debug_handler]
pub async fn get_attempt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let detail = state.attempt_service.get_attempt(id).await?;
    Ok(Json(detail))
}
