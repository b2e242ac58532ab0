use crate::models::attempt::{AnsweredQuestion, MockExamAttempt};
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestionPayload {
    #[validate(length(min = 1, message = "statement is required"))]
    pub statement: String,
    pub correct_choice: String,
    #[serde(default)]
    pub user_choice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptPayload {
    #[validate(custom(function = "not_blank", message = "subject is required"))]
    pub subject: String,
    #[validate(custom(function = "not_blank", message = "topic is required"))]
    pub topic: String,
    #[validate(length(min = 1, message = "at least one answered question is required"))]
    #[validate(nested)]
    pub questions: Vec<AnsweredQuestionPayload>,
}

impl From<SubmitAttemptPayload> for MockExamAttempt {
    fn from(payload: SubmitAttemptPayload) -> Self {
        Self {
            subject: payload.subject,
            topic: payload.topic,
            answered_questions: payload
                .questions
                .into_iter()
                .map(|q| AnsweredQuestion::new(q.statement, q.correct_choice, q.user_choice))
                .collect(),
        }
    }
}
