//! Annual compound interest calculation.

use bigdecimal::BigDecimal;

use super::growth::{compounded_interest, rate_fraction};

/// Calculates interest compounded once per year.
///
/// `interest = amount × (1 + interest_rate / 100)^duration − amount`.
/// The rate fraction is kept at full precision through the power step and
/// only the final interest is rounded to two digits half-up.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use interest_calculator::calculation::calculate_compound_interest;
///
/// let interest = calculate_compound_interest(&BigDecimal::from(1000), &BigDecimal::from(5), 3);
/// assert_eq!(interest.to_string(), "157.63");
/// ```
pub fn calculate_compound_interest(
    amount: &BigDecimal,
    interest_rate: &BigDecimal,
    duration: u32,
) -> BigDecimal {
    compounded_interest(amount, &rate_fraction(interest_rate), u64::from(duration))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::models::fractional_digits;

    fn decimal(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_compound_interest_reference_case() {
        // 1000 × 1.05³ = 1157.625 -> 157.625 -> 157.63
        let interest = calculate_compound_interest(&decimal("1000"), &decimal("5"), 3);
        assert_eq!(interest, decimal("157.63"));
        assert_eq!(interest.to_string(), "157.63");
    }

    #[test]
    fn test_compound_interest_single_year_equals_simple() {
        let interest = calculate_compound_interest(&decimal("1000"), &decimal("5"), 1);
        assert_eq!(interest, decimal("50.00"));
    }

    #[test]
    fn test_compound_interest_keeps_full_rate_precision() {
        // 1000 × 1.0375² = 1076.40625 -> 76.41
        let interest = calculate_compound_interest(&decimal("1000"), &decimal("3.75"), 2);
        assert_eq!(interest, decimal("76.41"));
    }

    #[test]
    fn test_compound_interest_doubling_at_full_rate() {
        // 100% for 10 years: 1000 × 2¹⁰ − 1000
        let interest = calculate_compound_interest(&decimal("1000"), &decimal("100"), 10);
        assert_eq!(interest, decimal("1023000.00"));
    }

    #[test]
    fn test_compound_interest_long_duration() {
        let interest = calculate_compound_interest(&decimal("1000"), &decimal("5"), 100);
        // 1.05^100 = 131.50125784630...
        assert_eq!(interest, decimal("130501.26"));
    }

    #[test]
    fn test_compound_interest_beyond_28_digits_keeps_cents() {
        // 10^12 × 1.9999^50 has 28 integer digits
        let interest = calculate_compound_interest(&decimal("1000000000000"), &decimal("99.99"), 50);
        assert_eq!(interest.to_string(), "1123088602387146220757045047.72");
        assert_eq!(fractional_digits(&interest), 2);

        // 0.01 × 2^100 − 0.01
        let interest = calculate_compound_interest(&decimal("0.01"), &decimal("100"), 100);
        assert_eq!(interest.to_string(), "12676506002282294014967032053.75");
        assert_eq!(fractional_digits(&interest), 2);
    }
}
