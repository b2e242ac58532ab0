use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A submitted mock exam. Built once from the request and written as-is.
#[derive(Debug, Clone)]
pub struct MockExamAttempt {
    pub subject: String,
    pub topic: String,
    pub answered_questions: Vec<AnsweredQuestion>,
}

impl MockExamAttempt {
    pub fn correct_answers(&self) -> usize {
        self.answered_questions.iter().filter(|q| q.is_correct).count()
    }
}

#[derive(Debug, Clone)]
pub struct AnsweredQuestion {
    pub statement: String,
    pub correct_choice: String,
    pub user_choice: Option<String>,
    pub is_correct: bool,
}

impl AnsweredQuestion {
    pub fn new(statement: String, correct_choice: String, user_choice: Option<String>) -> Self {
        let is_correct = user_choice.as_deref() == Some(correct_choice.as_str());
        Self {
            statement,
            correct_choice,
            user_choice,
            is_correct,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRow {
    pub id: i64,
    pub subject: String,
    pub topic: String,
    pub taken_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestionRow {
    pub id: i64,
    pub attempt_id: i64,
    pub position: i32,
    pub statement: String,
    pub correct_choice: String,
    pub user_choice: Option<String>,
    pub is_correct: bool,
}
