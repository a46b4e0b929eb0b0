//! Error handling - every failure becomes `{"error": "..."}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use notes_core::RepoError;
use notes_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// The request could not be decoded.
    BadRequest(String),
    /// Store failures and anything else the caller cannot fix.
    Internal(String),
}

impl AppError {
    fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

// The store's message is passed through to the caller unchanged
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match &err {
            RepoError::Connection(msg) => tracing::error!("Database connection error: {}", msg),
            RepoError::Query(msg) => tracing::error!("Database query error: {}", msg),
            RepoError::Constraint(msg) => tracing::error!("Database constraint error: {}", msg),
        }
        AppError::Internal(err.message().to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_repo_error_becomes_500_with_message() {
        let err = AppError::from(RepoError::Connection("connection refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        assert_eq!(body, r#"{"error":"connection refused"}"#);
    }

    #[test]
    fn test_bad_request_status() {
        let err = AppError::BadRequest("EOF while parsing".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
