//! Accrual type model.
//!
//! This module defines the closed set of interest accrual methods the
//! calculator supports and how they are parsed from request input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The interest-compounding method used for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccrualType {
    /// Simple interest, no compounding.
    Simple,
    /// Interest compounded once per year.
    Compound,
    /// Interest compounded daily over a 365-day year.
    Daily,
}

impl AccrualType {
    /// Every supported accrual type, in declaration order.
    pub const ALL: [AccrualType; 3] = [
        AccrualType::Simple,
        AccrualType::Compound,
        AccrualType::Daily,
    ];

    /// Returns the wire name of the accrual type (e.g. `"SIMPLE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AccrualType::Simple => "SIMPLE",
            AccrualType::Compound => "COMPOUND",
            AccrualType::Daily => "DAILY",
        }
    }
}

impl fmt::Display for AccrualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a supported accrual type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown accrual type '{0}'")]
pub struct ParseAccrualTypeError(
    /// The rejected input.
    pub String,
);

impl FromStr for AccrualType {
    type Err = ParseAccrualTypeError;

    /// Parses an accrual type, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use interest_calculator::models::AccrualType;
    ///
    /// assert_eq!("simple".parse::<AccrualType>().unwrap(), AccrualType::Simple);
    /// assert_eq!("Daily".parse::<AccrualType>().unwrap(), AccrualType::Daily);
    /// assert!("bogus".parse::<AccrualType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AccrualType::ALL
            .into_iter()
            .find(|accrual_type| accrual_type.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseAccrualTypeError(s.to_string()))
    }
}
