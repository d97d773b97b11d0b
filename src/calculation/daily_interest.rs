//! Daily compound interest calculation.
//!
//! Simulates compounding once per day over a 365-day year.

use bigdecimal::BigDecimal;

use crate::models::round_half_up;

use super::growth::{compounded_interest, rate_fraction};

/// Days in a year for daily compounding.
pub const DAYS_IN_YEAR: u32 = 365;

/// Fractional digits kept on the daily rate.
///
/// Ten digits is the floor: the per-day rate must keep enough precision
/// through the `365 × duration` power step.
pub const DAILY_RATE_SCALE: u32 = 10;

/// Returns the per-day rate used for daily compounding.
///
/// The annual rate fraction is first rounded to two digits half-up, then
/// divided by [`DAYS_IN_YEAR`] and rounded half-up to [`DAILY_RATE_SCALE`]
/// digits.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use interest_calculator::calculation::daily_rate;
///
/// assert_eq!(daily_rate(&BigDecimal::from(5)).to_string(), "0.0001369863");
/// ```
pub fn daily_rate(interest_rate: &BigDecimal) -> BigDecimal {
    let annual = round_half_up(&rate_fraction(interest_rate), 2);
    round_half_up(&(annual / BigDecimal::from(DAYS_IN_YEAR)), DAILY_RATE_SCALE)
}

/// Calculates interest compounded daily.
///
/// `interest = amount × (1 + daily_rate)^(365 × duration) − amount`, where
/// `daily_rate` comes from [`daily_rate`]. The final interest is rounded to
/// two digits half-up.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use interest_calculator::calculation::calculate_daily_interest;
///
/// let interest = calculate_daily_interest(&BigDecimal::from(1000), &BigDecimal::from(5), 3);
/// assert_eq!(interest.to_string(), "161.82");
/// ```
pub fn calculate_daily_interest(
    amount: &BigDecimal,
    interest_rate: &BigDecimal,
    duration: u32,
) -> BigDecimal {
    let periods = u64::from(DAYS_IN_YEAR) * u64::from(duration);
    compounded_interest(amount, &daily_rate(interest_rate), periods)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::calculation::calculate_compound_interest;
    use crate::models::fractional_digits;

    fn decimal(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_daily_rate_rounding() {
        assert_eq!(daily_rate(&decimal("5")), decimal("0.0001369863"));
        assert_eq!(daily_rate(&decimal("10")), decimal("0.0002739726"));
        assert_eq!(
            fractional_digits(&daily_rate(&decimal("5"))),
            i64::from(DAILY_RATE_SCALE)
        );
    }

    #[test]
    fn test_daily_rate_rounds_annual_fraction_to_two_digits() {
        // 5.4% -> 0.054 -> 0.05, 5.5% -> 0.055 -> 0.06
        assert_eq!(daily_rate(&decimal("5.4")), daily_rate(&decimal("5")));
        assert_eq!(daily_rate(&decimal("5.5")), daily_rate(&decimal("6")));
    }

    #[test]
    fn test_daily_interest_reference_case() {
        let interest = calculate_daily_interest(&decimal("1000"), &decimal("5"), 3);
        assert_eq!(interest, decimal("161.82"));
        assert_eq!(interest.to_string(), "161.82");
    }

    #[test]
    fn test_daily_interest_single_year() {
        let interest = calculate_daily_interest(&decimal("1000"), &decimal("5"), 1);
        assert_eq!(interest, decimal("51.27"));
    }

    #[test]
    fn test_daily_interest_half_percent_rounds_up() {
        let interest = calculate_daily_interest(&decimal("1000"), &decimal("5.5"), 1);
        assert_eq!(interest, decimal("61.83"));
    }

    #[test]
    fn test_daily_interest_hundred_years() {
        // 36500 compounding periods
        let interest = calculate_daily_interest(&decimal("1000"), &decimal("5"), 100);
        assert_eq!(interest, decimal("147362.34"));
    }

    #[test]
    fn test_daily_interest_exceeds_annual_compound() {
        let daily = calculate_daily_interest(&decimal("1000"), &decimal("10"), 10);
        let annual = calculate_compound_interest(&decimal("1000"), &decimal("10"), 10);
        assert_eq!(daily, decimal("1717.91"));
        assert!(daily >= annual);
    }

    #[test]
    fn test_daily_interest_at_full_rate_for_a_century() {
        // 1000 × 1.0027397260^36500 has 47 integer digits; the exact tail is .5014...
        let interest = calculate_daily_interest(&decimal("1000"), &decimal("100"), 100);
        assert_eq!(
            interest.to_string(),
            "23445732277771811123504839500725021958397471282.50"
        );
        assert_eq!(fractional_digits(&interest), 2);
    }
}
