//! Calculation request and response models.
//!
//! This module defines the validated input to a calculation and the
//! result triple returned to callers.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::AccrualType;

/// A validated interest calculation request.
///
/// Instances are produced by [`validate`](crate::validation::validate) and
/// always satisfy the documented input constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    /// The principal amount, strictly positive.
    pub amount: BigDecimal,
    /// The annual interest rate in percentage points (5 means 5%).
    pub interest_rate: BigDecimal,
    /// The duration in whole years.
    pub duration: u32,
    /// The accrual method to apply.
    pub accrual_type: AccrualType,
}

/// The result of an interest calculation.
///
/// All three amounts carry exactly two fractional digits and are serialized
/// as JSON numbers (e.g. `1157.63`), and `final_balance` always equals
/// `starting_amount + interest_accrued`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// The principal, rounded to two digits.
    #[serde(with = "super::money::json_number")]
    pub starting_amount: BigDecimal,
    /// The interest accrued over the duration, rounded to two digits.
    #[serde(with = "super::money::json_number")]
    pub interest_accrued: BigDecimal,
    /// The principal plus accrued interest.
    #[serde(with = "super::money::json_number")]
    pub final_balance: BigDecimal,
}
