//! Response assembly.
//!
//! Packages a principal and the interest accrued on it into a
//! [`CalculationResponse`].

use bigdecimal::BigDecimal;

use crate::models::{CalculationResponse, round_money};

/// Builds the response triple for a calculation.
///
/// The starting amount and interest are each rounded to two digits half-up
/// and the final balance is the sum of those rounded values, so
/// `final_balance == starting_amount + interest_accrued` holds exactly and
/// every field carries exactly two fractional digits, whatever its size.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use interest_calculator::calculation::assemble_response;
///
/// let interest = BigDecimal::from_str("157.63").unwrap();
/// let response = assemble_response(&BigDecimal::from(1000), &interest);
/// assert_eq!(response.final_balance.to_string(), "1157.63");
/// assert_eq!(response.starting_amount.to_string(), "1000.00");
/// ```
pub fn assemble_response(amount: &BigDecimal, interest_accrued: &BigDecimal) -> CalculationResponse {
    let starting_amount = round_money(amount);
    let interest_accrued = round_money(interest_accrued);
    let final_balance = round_money(&(&starting_amount + &interest_accrued));

    CalculationResponse {
        starting_amount,
        interest_accrued,
        final_balance,
    }
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
    fn test_all_fields_have_two_fractional_digits() {
        let response = assemble_response(&decimal("1000"), &decimal("150"));
        assert_eq!(response.starting_amount.to_string(), "1000.00");
        assert_eq!(response.interest_accrued.to_string(), "150.00");
        assert_eq!(response.final_balance.to_string(), "1150.00");
    }

    #[test]
    fn test_rounds_parts_before_summing() {
        // Rounding only the sum would give 0.01
        let response = assemble_response(&decimal("0.005"), &decimal("0.005"));
        assert_eq!(response.starting_amount, decimal("0.01"));
        assert_eq!(response.interest_accrued, decimal("0.01"));
        assert_eq!(response.final_balance, decimal("0.02"));
    }

    #[test]
    fn test_final_balance_is_exact_sum() {
        let response = assemble_response(&decimal("1234.565"), &decimal("98.7649"));
        assert_eq!(
            response.final_balance,
            &response.starting_amount + &response.interest_accrued
        );
        assert_eq!(response.final_balance, decimal("1333.33"));
    }

    #[test]
    fn test_wide_values_keep_two_fractional_digits() {
        let response = assemble_response(
            &decimal("1000"),
            &decimal("23445732277771811123504839500725021958397471282.50"),
        );

        assert_eq!(
            response.final_balance.to_string(),
            "23445732277771811123504839500725021958397472282.50"
        );
        assert_eq!(fractional_digits(&response.starting_amount), 2);
        assert_eq!(fractional_digits(&response.interest_accrued), 2);
        assert_eq!(fractional_digits(&response.final_balance), 2);
    }
}
