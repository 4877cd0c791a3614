//! API error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned to HTTP clients
///
/// Every error ends the request; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed or unparseable payload
    #[error("{0}")]
    InvalidRequest(String),

    /// Missing entity or token
    #[error("{0}")]
    NotFound(String),

    /// Business rule refused the request (used token, processed invitation)
    #[error("{0}")]
    Rejected(String),

    /// Key already occupied
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Rejected(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(message),
            StoreError::AlreadyExists { .. } => ApiError::Conflict(message),
            StoreError::TokenAlreadyUsed
            | StoreError::TokenExpired
            | StoreError::InvitationProcessed
            | StoreError::InvitationExpired => ApiError::Rejected(message),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            code: self.code(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let cases = [
            (StoreError::not_found("user", "u"), StatusCode::NOT_FOUND),
            (StoreError::already_exists("user", "u"), StatusCode::CONFLICT),
            (StoreError::TokenAlreadyUsed, StatusCode::BAD_REQUEST),
            (StoreError::TokenExpired, StatusCode::BAD_REQUEST),
            (StoreError::InvitationProcessed, StatusCode::BAD_REQUEST),
            (StoreError::InvitationExpired, StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_internal_error_response() {
        let response = ApiError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_is_preserved() {
        let err = ApiError::from(StoreError::TokenExpired);
        assert_eq!(err, ApiError::Rejected("Token expired".into()));
        assert_eq!(err.code(), "BAD_REQUEST");
    }
}
