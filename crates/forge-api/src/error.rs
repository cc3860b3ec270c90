//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps object handler outcomes to HTTP status codes with a JSON body
//! carrying an error code, a message and, for rejected declarations, the
//! list of per-property failures. Store failures are never described to
//! the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forge_core::ValidationError;
use forge_engine::HandlerError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "NOT_FOUND", "INVALID_DECLARATION").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Per-property failures of a rejected declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// A declaration was rejected property by property (422).
    #[error("{message}")]
    InvalidDeclaration {
        message: String,
        failures: Vec<String>,
    },

    /// The declaration is valid but cannot be realized as a type (422).
    #[error("declaration cannot be synthesized: {0}")]
    Unrealizable(String),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Conflict with current resource state (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::InvalidDeclaration { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_DECLARATION")
            }
            Self::Unrealizable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "SYNTHESIS_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
        }

        let details = match self {
            Self::InvalidDeclaration { failures, .. } => Some(serde_json::json!(failures)),
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<HandlerError> for AppError {
    fn from(err: HandlerError) -> Self {
        match err {
            HandlerError::Validation(ValidationError::Properties { shape, failures }) => {
                Self::InvalidDeclaration {
                    message: format!("declaration \"{shape}\" rejected"),
                    failures: failures.iter().map(ToString::to_string).collect(),
                }
            }
            HandlerError::Validation(e) => Self::Validation(e.to_string()),
            HandlerError::Synthesis(e) => Self::Unrealizable(e.to_string()),
            HandlerError::AlreadyExists(name) => {
                Self::Conflict(format!("declaration \"{name}\" already exists"))
            }
            HandlerError::NotFound(name) => Self::NotFound(format!("declaration \"{name}\"")),
            HandlerError::Store(e) => Self::Internal(e.to_string()),
        }
    }
}
