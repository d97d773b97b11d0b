//! Input validation for interest calculations.
//!
//! Turns raw query parameters into a [`CalculationRequest`], or into the
//! ordered list of every constraint the input violates. Checks never
//! short-circuit: a request with a bad amount and a bad duration reports
//! both.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::api::CalculationParams;
use crate::models::{AccrualType, CalculationRequest, ErrorItem};

/// Longest accepted duration, in years.
pub const MAX_YEARS: u32 = 100;

/// Highest accepted interest rate, in percentage points.
pub const MAX_INTEREST_RATE: u32 = 100;

/// Widest decimal input accepted, in significant digits and in digits of
/// exponent either side of the point. Wider input is treated as unparseable.
pub const MAX_INPUT_DIGITS: u64 = 1000;

/// Message reported when the amount is missing, malformed or not positive.
pub const AMOUNT_MESSAGE: &str = "Amount must be greater than zero.";
/// Message reported when the interest rate is outside (0, 100].
pub const INTEREST_RATE_MESSAGE: &str = "Interest rate must be between 0 and 100 percent.";
/// Message reported when the duration is outside [1, MAX_YEARS].
pub const DURATION_MESSAGE: &str = "Duration must be at least 1 year and a sensible number.";
/// Message reported when the accrual type is not recognised.
pub const ACCRUAL_TYPE_MESSAGE: &str = "Type is not valid.";

/// Validates raw calculation parameters.
///
/// Fields are checked in a fixed order (amount, interest rate, duration,
/// accrual type) and every violation is reported. A parameter that is
/// missing or does not parse is reported with the same message as an
/// out-of-range value for that field.
///
/// # Examples
///
/// ```
/// use interest_calculator::api::CalculationParams;
/// use interest_calculator::models::AccrualType;
/// use interest_calculator::validation::validate;
///
/// let params = CalculationParams::new("1000", "5", "3", "simple");
/// let request = validate(&params).unwrap();
/// assert_eq!(request.accrual_type, AccrualType::Simple);
///
/// let params = CalculationParams::new("-1000", "5", "0", "SIMPLE");
/// let errors = validate(&params).unwrap_err();
/// assert_eq!(errors[0].property, "amount");
/// assert_eq!(errors[1].property, "duration");
/// ```
pub fn validate(params: &CalculationParams) -> Result<CalculationRequest, Vec<ErrorItem>> {
    let mut errors = Vec::new();

    let amount = parse_decimal(params.amount.as_deref()).filter(|amount| *amount > BigDecimal::zero());
    if amount.is_none() {
        errors.push(ErrorItem::new("amount", AMOUNT_MESSAGE));
    }

    let interest_rate = parse_decimal(params.interest_rate.as_deref())
        .filter(|rate| *rate > BigDecimal::zero() && *rate <= BigDecimal::from(MAX_INTEREST_RATE));
    if interest_rate.is_none() {
        errors.push(ErrorItem::new("interestRate", INTEREST_RATE_MESSAGE));
    }

    let duration = params
        .duration
        .as_deref()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|years| (1..=MAX_YEARS).contains(years));
    if duration.is_none() {
        errors.push(ErrorItem::new("duration", DURATION_MESSAGE));
    }

    let accrual_type = params
        .accrual_type
        .as_deref()
        .and_then(|value| AccrualType::from_str(value).ok());
    if accrual_type.is_none() {
        errors.push(ErrorItem::new("accrualType", ACCRUAL_TYPE_MESSAGE));
    }

    match (amount, interest_rate, duration, accrual_type) {
        (Some(amount), Some(interest_rate), Some(duration), Some(accrual_type)) => {
            Ok(CalculationRequest {
                amount,
                interest_rate,
                duration,
                accrual_type,
            })
        }
        _ => Err(errors),
    }
}

/// Parses a decimal in plain (`1000.50`) or scientific (`1e3`) notation.
///
/// Values wider than [`MAX_INPUT_DIGITS`] are rejected before any arithmetic
/// touches them.
fn parse_decimal(value: Option<&str>) -> Option<BigDecimal> {
    let parsed = BigDecimal::from_str(value?.trim()).ok()?;
    let (_, scale) = parsed.as_bigint_and_exponent();

    (parsed.digits() <= MAX_INPUT_DIGITS && scale.unsigned_abs() <= MAX_INPUT_DIGITS)
        .then_some(parsed)
}
