use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Shown for every failure that happens while talking to the model.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to communicate with the AI model.";

pub const MISSING_API_KEY_MESSAGE: &str =
    "API key not configured on the server. Please contact the site administrator.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Format(msg) => AppError::UpstreamFormat(msg),
            LlmError::Parse(e) => AppError::UpstreamFormat(e.to_string()),
            LlmError::EmptyContent => {
                AppError::UpstreamFormat("model returned no text content".to_string())
            }
            other => AppError::Upstream(other.to_string()),
        }
    }
}

/// Error body: `{ "error": "...", "details": "..." }`, `details` omitted when absent.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body.".to_string(),
                Some(detail),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MISSING_API_KEY_MESSAGE.to_string(),
                    None,
                )
            }
            AppError::Upstream(detail) => {
                tracing::error!("Upstream error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_FAILURE_MESSAGE.to_string(),
                    Some(detail),
                )
            }
            AppError::UpstreamFormat(detail) => {
                tracing::error!("Upstream format error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_FAILURE_MESSAGE.to_string(),
                    Some(detail),
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
