use crate::error::Result;
use crate::models::attempt::{AnsweredQuestionRow, AttemptRow, MockExamAttempt};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAttempt {
    pub id: i64,
    pub subject: String,
    pub topic: String,
    pub taken_at: DateTime<Utc>,
    pub total_questions: usize,
    pub correct_answers: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDetail {
    #[serde(flatten)]
    pub attempt: AttemptRow,
    pub questions: Vec<AnsweredQuestionRow>,
}

#[derive(Clone)]
pub struct AttemptService {
    pool: PgPool,
}

impl AttemptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Writes the attempt and all of its answers in one transaction. If any
    /// insert fails the transaction is dropped uncommitted and rolls back.
    pub async fn save_attempt(&self, attempt: &MockExamAttempt) -> Result<SavedAttempt> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, AttemptRow>(
            r#"
            INSERT INTO mock_exam_attempts (subject, topic)
            VALUES ($1, $2)
            RETURNING id, subject, topic, taken_at
            "#,
        )
        .bind(&attempt.subject)
        .bind(&attempt.topic)
        .fetch_one(&mut *tx)
        .await?;

        for (position, answered) in attempt.answered_questions.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO answered_questions (
                    attempt_id, position, statement, correct_choice, user_choice, is_correct
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(row.id)
            .bind(position as i32)
            .bind(&answered.statement)
            .bind(&answered.correct_choice)
            .bind(&answered.user_choice)
            .bind(answered.is_correct)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            attempt_id = row.id,
            questions = attempt.answered_questions.len(),
            correct = attempt.correct_answers(),
            "mock exam attempt saved"
        );

        Ok(SavedAttempt {
            id: row.id,
            subject: row.subject,
            topic: row.topic,
            taken_at: row.taken_at,
            total_questions: attempt.answered_questions.len(),
            correct_answers: attempt.correct_answers(),
        })
    }

    pub async fn get_attempt(&self, id: i64) -> Result<AttemptDetail> {
        let attempt = sqlx::query_as::<_, AttemptRow>(
            "SELECT id, subject, topic, taken_at FROM mock_exam_attempts WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        let questions = sqlx::query_as::<_, AnsweredQuestionRow>(
            r#"
            SELECT id, attempt_id, position, statement, correct_choice, user_choice, is_correct
            FROM answered_questions
            WHERE attempt_id = $1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(AttemptDetail { attempt, questions })
    }
}
