//! HTTP API module for the Interest Calculator.
//!
//! This module provides the `GET /interest/calculate` endpoint and its
//! request and response types.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationParams;
pub use response::{ApiErrorResponse, ErrorResponse};
pub use state::AppState;
