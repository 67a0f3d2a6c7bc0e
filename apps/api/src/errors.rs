use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::controller::SubmitError;
use crate::contact::form::ValidationErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Form validation failed on {} field(s)", .0.len())]
    InvalidForm(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Email dispatch failed: {0}")]
    Dispatch(String),

    #[error("CV download failed: {0}")]
    Download(#[source] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => AppError::InvalidForm(errors),
            SubmitError::AlreadySubmitting => AppError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InvalidForm(errors) => {
                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": self.to_string(),
                        "fields": errors
                    }
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            // Already logged by the controller that saw the failure.
            AppError::Dispatch(_) => (
                StatusCode::BAD_GATEWAY,
                "DISPATCH_ERROR",
                "The message could not be sent. Please try again later.".to_string(),
            ),
            // Download failures keep the flat `{message, error}` body clients expect.
            AppError::Download(e) => {
                tracing::error!("CV download error: {e}");
                let body = Json(json!({
                    "message": "Could not download the file.",
                    "error": e.to_string()
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
