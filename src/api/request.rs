//! Request types for the Interest Calculator API.
//!
//! This module defines the query parameters accepted by the
//! `/interest/calculate` endpoint.

use serde::{Deserialize, Serialize};

/// Raw query parameters for `GET /interest/calculate`.
///
/// Every field is kept as an optional string so that missing or malformed
/// values reach [`validate`](crate::validation::validate), which owns all
/// user-facing error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationParams {
    /// The principal amount.
    pub amount: Option<String>,
    /// The annual interest rate in percentage points.
    pub interest_rate: Option<String>,
    /// The duration in years.
    pub duration: Option<String>,
    /// The accrual type (`SIMPLE`, `COMPOUND` or `DAILY`, any case).
    pub accrual_type: Option<String>,
}

impl CalculationParams {
    /// Creates parameters with every field present.
    pub fn new(
        amount: impl Into<String>,
        interest_rate: impl Into<String>,
        duration: impl Into<String>,
        accrual_type: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            interest_rate: Some(interest_rate.into()),
            duration: Some(duration.into()),
            accrual_type: Some(accrual_type.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_query_names() {
        let json = r#"{
            "amount": "1000",
            "interestRate": "5",
            "duration": "3",
            "accrualType": "SIMPLE"
        }"#;

        let params: CalculationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params, CalculationParams::new("1000", "5", "3", "SIMPLE"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let params: CalculationParams = serde_json::from_str(r#"{"amount": "1000"}"#).unwrap();
        assert_eq!(params.amount.as_deref(), Some("1000"));
        assert!(params.interest_rate.is_none());
        assert!(params.duration.is_none());
        assert!(params.accrual_type.is_none());
    }
}
