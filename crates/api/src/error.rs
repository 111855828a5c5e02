//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. This is the only place where
//! internal failures become HTTP statuses; server-side failures are logged and
//! captured to Sentry before the response is built, and their details never
//! reach the client.
//!
//! Error bodies are JSON: `{"detail": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use employee_registry_core::InvalidKey;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Well-formed request with a missing or mistyped value.
    #[error("{0}")]
    Validation(String),

    /// Request body could not be read as JSON at all.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    /// The 404 returned for every unknown employee id.
    #[must_use]
    pub const fn employee_not_found() -> Self {
        Self::NotFound("Employee")
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Database(RepositoryError::Database(_)) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        // Don't expose internal error details to clients
        let detail = match self {
            Self::Database(RepositoryError::Conflict(msg)) => msg,
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<InvalidKey> for AppError {
    fn from(err: InvalidKey) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => Self::Validation(err.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => Self::Validation(err.body_text()),
            other => Self::Internal(other.body_text()),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn detail_of(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body["detail"].as_str().unwrap().to_string())
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(AppError::employee_not_found().to_string(), "Employee not found");
        assert_eq!(
            AppError::Validation("missing field `email`".to_string()).to_string(),
            "missing field `email`"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::employee_not_found().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::BadRequest("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RepositoryError::Conflict("dup".to_string())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(RepositoryError::Database(sqlx::Error::PoolTimedOut)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("x".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, detail) = detail_of(AppError::employee_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Employee not found");
    }

    #[tokio::test]
    async fn test_conflict_body_passes_message_through() {
        let err = AppError::from(RepositoryError::Conflict(
            "Employee with this email already exists".to_string(),
        ));
        let (status, detail) = detail_of(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(detail, "Employee with this email already exists");
    }

    #[tokio::test]
    async fn test_database_error_is_not_leaked() {
        let err = AppError::from(RepositoryError::Database(sqlx::Error::Protocol(
            "password authentication failed for user app".to_string(),
        )));
        let (status, detail) = detail_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Internal server error");
    }

    #[test]
    fn test_invalid_key_conversion() {
        let err = AppError::from(InvalidKey("abc".to_string()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("`abc`")));
    }
}
