//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes. [`ServerError`] covers startup.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use poc_api_core::CoreError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "MISSING_PARAMETER").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required query parameter was not sent (400).
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// Query string could not be decoded (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A subprocess could not be spawned, read, or finished in time (500).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingParameter(_) => (StatusCode::BAD_REQUEST, "MISSING_PARAMETER"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::ExecutionFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXECUTION_FAILED")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match self {
            ApiError::MissingParameter(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::ExecutionFailed(msg) => msg,
        };

        let body = serde_json::json!({
            "success": false,
            "error": ApiErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::MissingParameter { .. } => ApiError::MissingParameter(err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Failures that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable or flag held an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Binding the listener or serving connections failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_parameter_maps_to_400() {
        let err: ApiError = CoreError::MissingParameter { name: "username" }.into();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "MISSING_PARAMETER");
        assert_eq!(
            body["error"]["message"],
            "required query parameter 'username' is not present"
        );
    }

    #[tokio::test]
    async fn execution_failure_maps_to_500() {
        let (status, body) = body_json(ApiError::ExecutionFailed("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EXECUTION_FAILED");
        assert_eq!(body["error"]["message"], "boom");
    }
}
