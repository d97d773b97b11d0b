//! Monetary rounding helpers.
//!
//! All amounts leaving the calculator carry exactly two fractional digits and
//! are rounded half-up (a trailing 5 rounds away from zero).

use bigdecimal::{BigDecimal, RoundingMode};

/// Number of fractional digits on every monetary output.
pub const MONEY_SCALE: u32 = 2;

/// Rounds `value` to `scale` fractional digits using round-half-up.
///
/// The result always carries exactly `scale` fractional digits, so
/// rounding `1000` to two digits displays as `1000.00`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use interest_calculator::models::round_half_up;
///
/// let value = BigDecimal::from_str("157.625").unwrap();
/// assert_eq!(round_half_up(&value, 2).to_string(), "157.63");
/// assert_eq!(round_half_up(&BigDecimal::from(1000), 2).to_string(), "1000.00");
/// ```
pub fn round_half_up(value: &BigDecimal, scale: u32) -> BigDecimal {
    value.with_scale_round(i64::from(scale), RoundingMode::HalfUp)
}

/// Rounds a monetary value to [`MONEY_SCALE`] digits, half-up.
pub fn round_money(value: &BigDecimal) -> BigDecimal {
    round_half_up(value, MONEY_SCALE)
}

/// Number of fractional digits `value` carries.
pub fn fractional_digits(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}

/// Serde adapter writing a [`BigDecimal`] as a JSON number with its scale
/// intact (`1000.00` stays `1000.00`).
///
/// Relies on `serde_json`'s `arbitrary_precision` feature.
pub mod json_number {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

    /// Serializes `value` as a JSON number.
    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&value.to_string()).map_err(ser::Error::custom)?;
        number.serialize(serializer)
    }

    /// Deserializes a JSON number without passing through `f64`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        BigDecimal::from_str(&number.to_string()).map_err(de::Error::custom)
    }
}
