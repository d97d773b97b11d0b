//! Simple interest calculation.
//!
//! Simple interest accrues on the principal only: nothing earned in one year
//! earns interest in later years.

use bigdecimal::BigDecimal;

use crate::models::round_money;

use super::growth::rate_fraction;

/// Calculates simple interest accrued on `amount`.
///
/// `interest = amount × (interest_rate / 100) × duration`, rounded to two
/// digits half-up as the final step. The product is exact.
///
/// # Arguments
///
/// * `amount` - The principal
/// * `interest_rate` - The annual rate in percentage points (5 means 5%)
/// * `duration` - The number of years
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use interest_calculator::calculation::calculate_simple_interest;
///
/// let interest = calculate_simple_interest(&BigDecimal::from(1000), &BigDecimal::from(5), 3);
/// assert_eq!(interest.to_string(), "150.00");
/// ```
pub fn calculate_simple_interest(
    amount: &BigDecimal,
    interest_rate: &BigDecimal,
    duration: u32,
) -> BigDecimal {
    let interest = amount * rate_fraction(interest_rate) * BigDecimal::from(duration);
    round_money(&interest)
}
