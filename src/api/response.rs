//! Response types for the Interest Calculator API.
//!
//! This module defines the error response body and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ErrorItem;

/// Error response body returned for every non-200 outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code, repeated in the body.
    pub code: u16,
    /// A short summary of the failure.
    pub message: String,
    /// The individual violations, in validation check order.
    pub errors: Vec<ErrorItem>,
}

impl ErrorResponse {
    /// Creates an error response.
    pub fn new(status: StatusCode, message: impl Into<String>, errors: Vec<ErrorItem>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            errors,
        }
    }

    /// Creates the 400 response for failed input validation.
    pub fn validation_error(errors: Vec<ErrorItem>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", errors)
    }

    /// Creates the 400 response for a query string that could not be decoded.
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Vec::new())
    }
}

/// Error response paired with its HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ErrorResponse,
}

impl ApiErrorResponse {
    /// Wraps an error body, taking the status from its `code`.
    pub fn new(error: ErrorResponse) -> Self {
        let status =
            StatusCode::from_u16(error.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::StrategyNotRegistered { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => ApiErrorResponse::new(ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                Vec::new(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccrualType;

    #[test]
    fn test_validation_error_serialization() {
        let error = ErrorResponse::validation_error(vec![ErrorItem::new(
            "duration",
            "Duration must be at least 1 year and a sensible number.",
        )]);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            r#"{"code":400,"message":"Validation Error","errors":[{"property":"duration","message":"Duration must be at least 1 year and a sensible number."}]}"#
        );
    }

    #[test]
    fn test_bad_request_has_no_items() {
        let error = ErrorResponse::bad_request();
        assert_eq!(error.code, 400);
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_missing_strategy_maps_to_500() {
        let engine_error = EngineError::StrategyNotRegistered {
            accrual_type: AccrualType::Simple,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, 500);
        assert!(api_error.error.errors.is_empty());
    }
}
