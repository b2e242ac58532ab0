use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::generation_dto::{
    GenerateBatchPayload, GenerateQuestionPayload, TransformTextPayload, TransformTextResponse,
};
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::services::batch_service::generate_batch;
use crate::AppState;

#[axum::debug_handler]
pub async fn generate_question(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuestionPayload>,
) -> Result<Json<Question>> {
    payload.validate()?;
    let request = payload.to_request();

    match state.ai_service.generate_question(&request).await? {
        Some(question) => Ok(Json(question)),
        None => Err(Error::Generation(
            "the model did not return a valid question".to_string(),
        )),
    }
}

#[axum::debug_handler]
pub async fn generate_mock_exam(
    State(state): State<AppState>,
    Json(payload): Json<GenerateBatchPayload>,
) -> Result<Json<Vec<Question>>> {
    payload.validate()?;
    let request = payload.params.to_request();

    let questions = generate_batch(&state.ai_service, &request, payload.quantity).await?;
    if questions.len() < payload.quantity {
        tracing::warn!(
            produced = questions.len(),
            requested = payload.quantity,
            "mock exam generation fell short"
        );
        return Err(Error::Shortfall {
            produced: questions.len(),
            requested: payload.quantity,
        });
    }
    Ok(Json(questions))
}

#[axum::debug_handler]
pub async fn transform_text(
    State(state): State<AppState>,
    Json(payload): Json<TransformTextPayload>,
) -> Result<Json<TransformTextResponse>> {
    payload.validate()?;
    let processed_text = state
        .ai_service
        .transform_text(&payload.text, &payload.instruction)
        .await?;
    Ok(Json(TransformTextResponse { processed_text }))
}
