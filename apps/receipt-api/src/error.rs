//! Error types for the Receipt API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ValidationError;
use receipt_store::StoreError;

use crate::responses::ErrorResponse;

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// A failed store write during receipt processing.
    pub fn save_failed(source: StoreError) -> Self {
        ApiError::Storage {
            message: "Failed to process receipt",
            source,
        }
    }

    /// A failed store read other than an unknown id.
    pub fn lookup_failed(source: StoreError) -> Self {
        ApiError::Storage {
            message: "Failed to get points",
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text for the `error` field of the response body. Internal details
    /// stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::MalformedPayload(_) => "Invalid request payload".to_string(),
            ApiError::Validation(err) => err.to_string(),
            ApiError::NotFound(_) => "Receipt not found".to_string(),
            ApiError::Storage { message, .. } => message.to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for handler and service operations.
pub type ApiResult<T> = Result<T, ApiError>;
