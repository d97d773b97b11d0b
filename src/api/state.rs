//! Application state for the Interest Calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::InterestCalculator;

/// Shared application state.
///
/// Holds the strategy table, built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<InterestCalculator>,
}

impl AppState {
    /// Creates a new application state around the given calculator.
    pub fn new(calculator: InterestCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the interest calculator.
    pub fn calculator(&self) -> &InterestCalculator {
        &self.calculator
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InterestCalculator::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccrualType;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_supports_every_type() {
        let state = AppState::default();
        for accrual_type in AccrualType::ALL {
            assert!(state.calculator().supports(accrual_type));
        }
    }
}
