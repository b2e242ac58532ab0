use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Language model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Generated {produced} of {requested} requested questions")]
    Shortfall { produced: usize, requested: usize },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match &self {
            Error::ModelUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            Error::Generation(detail) => {
                tracing::error!(%detail, "generation failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate content".to_string(),
                )
            }
            Error::Shortfall { .. } => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            Error::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Reqwest(err) => {
                tracing::error!(error = %err, "external service failure");
                (StatusCode::BAD_GATEWAY, "External service error".to_string())
            }
            Error::Database(err) => {
                tracing::error!(error = ?err, "database failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to persist data".to_string())
            }
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfall_reports_counts_as_server_error() {
        let err = Error::Shortfall {
            produced: 3,
            requested: 5,
        };
        assert_eq!(err.to_string(), "Generated 3 of 5 requested questions");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (Error::ModelUnavailable("no key".into()), StatusCode::SERVICE_UNAVAILABLE),
            (Error::UnsupportedFormat("csv".into()), StatusCode::BAD_REQUEST),
            (Error::NotFound("attempt".into()), StatusCode::NOT_FOUND),
            (Error::from(sqlx::Error::PoolTimedOut), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn generation_details_stay_out_of_the_body() {
        let resp = Error::Generation("upstream said key=abc123".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Failed to generate content");
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        assert!(matches!(
            Error::from(sqlx::Error::RowNotFound),
            Error::NotFound(_)
        ));
    }
}
