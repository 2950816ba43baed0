use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use movie_db::error::DbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DbError`] for repository errors and adds transport-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A repository error from `movie_db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Malformed or missing required input, rejected before reaching the
    /// service layer.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Db(err) => classify_db_error(err),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// - `NotFound` maps to 404.
/// - Every storage failure maps to 500 with a sanitized message; the
///   details go to the log, not to the client.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::NotFound { id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("movie with id {id} not found"),
        ),
        other => {
            tracing::error!(error = %other, "Storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
