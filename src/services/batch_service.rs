use crate::error::Result;
use crate::models::generation::GenerationRequest;
use crate::models::question::Question;
use crate::services::ai_service::AIService;
use futures::stream::{self, StreamExt};

pub const MAX_BATCH_QUESTIONS: usize = 10;

/// Runs `count` independent generations concurrently and returns the ones
/// that produced a valid question, in completion order. Individual failures
/// are dropped; deciding whether a shortfall is fatal is up to the caller.
pub async fn generate_batch(
    ai_service: &AIService,
    request: &GenerationRequest,
    count: usize,
) -> Result<Vec<Question>> {
    ai_service.ensure_available()?;
    let count = count.min(MAX_BATCH_QUESTIONS);

    tracing::info!(
        count,
        subject = %request.subject,
        topic = %request.topic,
        "starting batch generation"
    );

    let outcomes: Vec<Result<Option<Question>>> = stream::iter(0..count)
        .map(|_| ai_service.generate_question(request))
        .buffer_unordered(count.max(1))
        .collect()
        .await;

    let mut questions = Vec::with_capacity(count);
    for outcome in outcomes {
        if let Some(question) = outcome? {
            questions.push(question);
        }
    }

    tracing::info!(
        produced = questions.len(),
        requested = count,
        "batch generation finished"
    );
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::generation::Difficulty;
    use crate::services::ai_service::MockLanguageModel;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const REPLY: &str = r#"{"statement":"2 + 2 = ?","choices":["1","2","3","4"],"correctChoice":"4","explanation":"Arithmetic."}"#;

    fn request() -> GenerationRequest {
        GenerationRequest::new("Math", "Addition", Difficulty::Easy, None)
    }

    fn service_failing_on(failing_calls: &'static [usize]) -> AIService {
        let calls = AtomicUsize::new(0);
        let mut model = MockLanguageModel::new();
        model.expect_generate().returning(move |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if failing_calls.contains(&n) {
                Err(Error::Generation(format!("call {n} failed")))
            } else {
                Ok(REPLY.to_string())
            }
        });
        AIService::new(Arc::new(model))
    }

    #[tokio::test]
    async fn all_successes_are_returned() {
        let service = service_failing_on(&[]);
        let questions = generate_batch(&service, &request(), 5).await.unwrap();
        assert_eq!(questions.len(), 5);
    }

    #[tokio::test]
    async fn failed_items_are_dropped_without_error() {
        let service = service_failing_on(&[1, 3]);
        let questions = generate_batch(&service, &request(), 5).await.unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.check().is_ok()));
    }

    #[tokio::test]
    async fn count_is_capped() {
        let service = service_failing_on(&[]);
        let questions = generate_batch(&service, &request(), 50).await.unwrap();
        assert_eq!(questions.len(), MAX_BATCH_QUESTIONS);
    }

    #[tokio::test]
    async fn zero_count_yields_nothing() {
        let service = service_failing_on(&[]);
        assert!(generate_batch(&service, &request(), 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_model_is_a_configuration_error() {
        let result = generate_batch(&AIService::unavailable(), &request(), 3).await;
        assert!(matches!(result, Err(Error::ModelUnavailable(_))));
    }
}
