//! Error types for the Interest Calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions that are not user input problems. Input
//! validation failures are reported separately as
//! [`ErrorItem`](crate::models::ErrorItem) lists.

use thiserror::Error;

use crate::models::AccrualType;

/// The main error type for the Interest Calculator.
///
/// # Example
///
/// ```
/// use interest_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/server.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/server.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An accrual type reached the calculator without a registered strategy.
    ///
    /// This is an internal defect, not a user error.
    #[error("No calculation strategy registered for accrual type {accrual_type}")]
    StrategyNotRegistered {
        /// The accrual type that had no strategy.
        accrual_type: AccrualType,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
