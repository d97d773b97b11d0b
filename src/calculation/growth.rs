//! Compounding arithmetic shared by the annual and daily strategies.
//!
//! Balances grow without bound (1000 compounded daily at 100% for a century
//! has 47 integer digits), so the power step runs on [`BigDecimal`] with a
//! working precision sized to the result instead of a fixed-width decimal.

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, ToPrimitive};

use crate::models::{MONEY_SCALE, round_money};

/// Significant digits carried past the cent through every multiplication.
const GUARD_DIGITS: u64 = 30;

/// Converts a rate in percentage points to a fraction (5 becomes 0.05).
pub(crate) fn rate_fraction(interest_rate: &BigDecimal) -> BigDecimal {
    interest_rate * BigDecimal::new(1.into(), 2)
}

/// Interest accrued on `amount` after `periods` compounding steps at
/// `rate_per_period`, rounded to cents half-up.
///
/// The power is exact whenever `(1 + rate_per_period)^periods` fits in the
/// working precision, and otherwise off by less than `10^-30` of a cent.
pub(crate) fn compounded_interest(
    amount: &BigDecimal,
    rate_per_period: &BigDecimal,
    periods: u64,
) -> BigDecimal {
    let precision = working_precision(amount, rate_per_period, periods);
    let growth = power(&(BigDecimal::one() + rate_per_period), periods, precision);

    round_money(&(amount * growth - amount))
}

/// Significant digits needed to keep `amount × (1 + rate)^periods` accurate
/// past the cent.
///
/// Uses `log10(1 + r) <= r × log10(e)` to bound the integer digits the growth
/// factor adds, with `0.4343` as an upper bound on `log10(e)`.
fn working_precision(amount: &BigDecimal, rate_per_period: &BigDecimal, periods: u64) -> u64 {
    let log10_e = BigDecimal::new(4343.into(), 4);
    let growth_digits = (rate_per_period * BigDecimal::from(periods) * log10_e)
        .with_scale_round(0, RoundingMode::Ceiling)
        .to_u64()
        .unwrap_or(0);
    let exponent_digits = u64::from(periods.checked_ilog10().unwrap_or(0)) + 1;

    integer_digits(amount) + growth_digits + 1 + exponent_digits + u64::from(MONEY_SCALE) + GUARD_DIGITS
}

fn integer_digits(value: &BigDecimal) -> u64 {
    let (_, scale) = value.as_bigint_and_exponent();
    let digits = i64::try_from(value.digits()).unwrap_or(i64::MAX);
    u64::try_from(digits.saturating_sub(scale)).unwrap_or(0).max(1)
}

/// `base^exponent` by repeated squaring, each product rounded to `precision`
/// significant digits.
fn power(base: &BigDecimal, mut exponent: u64, precision: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.clone();

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = (&result * &square).with_prec(precision);
        }
        exponent >>= 1;
        if exponent > 0 {
            square = (&square * &square).with_prec(precision);
        }
    }

    result
}
