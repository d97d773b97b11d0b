//! HTTP request handlers for the Interest Calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::validation::validate;

use super::request::CalculationParams;
use super::response::{ApiErrorResponse, ErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/interest/calculate", get(calculate_handler))
        .with_state(state)
}

/// Handler for GET /interest/calculate.
///
/// Validates the query parameters and, when they are valid, returns the
/// starting amount, interest accrued and final balance.
async fn calculate_handler(
    State(state): State<AppState>,
    params: Result<Query<CalculationParams>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing interest calculation request");

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string could not be decoded"
            );
            return ApiErrorResponse::new(ErrorResponse::bad_request()).into_response();
        }
    };

    let request = match validate(&params) {
        Ok(request) => request,
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                error_count = errors.len(),
                "Validation failed"
            );
            return ApiErrorResponse::new(ErrorResponse::validation_error(errors)).into_response();
        }
    };

    let start_time = Instant::now();
    match state.calculator().evaluate(&request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                accrual_type = %request.accrual_type,
                duration = request.duration,
                interest_accrued = %response.interest_accrued,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            error!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
