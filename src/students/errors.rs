//! # Student API Errors
//!
//! Every failure leaves the service as `{ "message": ... }` with a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use super::payload::ValidationError;
use crate::store::StoreError;

/// Result type for student operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Student API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No student with the requested id
    #[error("Student not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Record store failed to read or write
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Store failures stay server-side: the
    /// detail names the data file, so clients only get a generic message.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Body of every non-2xx response, and of the delete response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Store(err) = &self {
            tracing::error!(error = %err, "record store failure");
        }
        let body = Json(MessageResponse {
            message: self.client_message(),
        });
        (status, body).into_response()
    }
}
