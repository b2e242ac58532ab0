use crate::models::generation::{Difficulty, GenerationRequest};
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionPayload {
    #[validate(custom(function = "not_blank", message = "subject is required"))]
    pub subject: String,
    #[validate(custom(function = "not_blank", message = "topic is required"))]
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, alias = "context")]
    pub source_excerpt: Option<String>,
}

impl GenerateQuestionPayload {
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.subject.trim(),
            self.topic.trim(),
            self.difficulty,
            self.source_excerpt.clone(),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBatchPayload {
    #[serde(flatten)]
    #[validate(nested)]
    pub params: GenerateQuestionPayload,
    #[validate(range(min = 1, max = 10, message = "quantity must be between 1 and 10"))]
    pub quantity: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransformTextPayload {
    #[validate(custom(function = "not_blank", message = "text is required"))]
    pub text: String,
    #[validate(custom(function = "not_blank", message = "instruction is required"))]
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformTextResponse {
    pub processed_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadContextResponse {
    pub filename: String,
    pub text: String,
}
