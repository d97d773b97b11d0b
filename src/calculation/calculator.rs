//! Strategy selection for interest calculations.
//!
//! The [`InterestCalculator`] maps each [`AccrualType`] to the function that
//! computes interest for it and delegates to that function.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AccrualType, CalculationRequest, CalculationResponse};

use super::{
    assemble_response, calculate_compound_interest, calculate_daily_interest,
    calculate_simple_interest,
};

/// A function computing interest accrued from `(amount, interest_rate, duration)`.
pub type InterestStrategy = fn(&BigDecimal, &BigDecimal, u32) -> BigDecimal;

impl AccrualType {
    /// Returns the built-in strategy implementing this accrual type.
    pub fn strategy(self) -> InterestStrategy {
        match self {
            AccrualType::Simple => calculate_simple_interest,
            AccrualType::Compound => calculate_compound_interest,
            AccrualType::Daily => calculate_daily_interest,
        }
    }
}

/// Selects and runs the strategy registered for an accrual type.
///
/// The calculator holds no mutable state once built and can be shared
/// freely between requests. Outside this crate the only table available is
/// [`InterestCalculator::standard`].
///
/// # Example
///
/// ```
/// use bigdecimal::BigDecimal;
/// use interest_calculator::calculation::InterestCalculator;
/// use interest_calculator::models::AccrualType;
///
/// let calculator = InterestCalculator::standard();
/// let interest = calculator
///     .calculate(&BigDecimal::from(1000), &BigDecimal::from(5), 3, AccrualType::Compound)
///     .unwrap();
/// assert_eq!(interest.to_string(), "157.63");
/// ```
///
/// The strategy table cannot be opened from outside the crate:
///
/// ```compile_fail
/// use interest_calculator::calculation::InterestCalculator;
///
/// let calculator = InterestCalculator::empty();
/// ```
#[derive(Debug, Clone)]
pub struct InterestCalculator {
    strategies: HashMap<AccrualType, InterestStrategy>,
}

impl InterestCalculator {
    /// Creates a calculator with no registered strategies.
    pub(crate) fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Creates a calculator with the built-in strategy for every accrual type.
    pub fn standard() -> Self {
        AccrualType::ALL
            .into_iter()
            .fold(Self::empty(), |calculator, accrual_type| {
                calculator.register(accrual_type, accrual_type.strategy())
            })
    }

    /// Registers `strategy` for `accrual_type`, replacing any previous entry.
    pub(crate) fn register(mut self, accrual_type: AccrualType, strategy: InterestStrategy) -> Self {
        self.strategies.insert(accrual_type, strategy);
        self
    }

    /// Returns true if a strategy is registered for `accrual_type`.
    pub fn supports(&self, accrual_type: AccrualType) -> bool {
        self.strategies.contains_key(&accrual_type)
    }

    /// Calculates the interest accrued using the strategy for `accrual_type`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StrategyNotRegistered`] if no strategy is
    /// registered for the accrual type.
    pub fn calculate(
        &self,
        amount: &BigDecimal,
        interest_rate: &BigDecimal,
        duration: u32,
        accrual_type: AccrualType,
    ) -> EngineResult<BigDecimal> {
        let strategy = self
            .strategies
            .get(&accrual_type)
            .ok_or(EngineError::StrategyNotRegistered { accrual_type })?;

        debug!(%accrual_type, %amount, %interest_rate, duration, "Running interest strategy");
        Ok(strategy(amount, interest_rate, duration))
    }

    /// Runs a validated request end to end and assembles the response.
    ///
    /// # Example
    ///
    /// ```
    /// use interest_calculator::calculation::InterestCalculator;
    /// use interest_calculator::models::{AccrualType, CalculationRequest};
    /// use bigdecimal::BigDecimal;
    ///
    /// let request = CalculationRequest {
    ///     amount: BigDecimal::from(1000),
    ///     interest_rate: BigDecimal::from(5),
    ///     duration: 3,
    ///     accrual_type: AccrualType::Daily,
    /// };
    /// let response = InterestCalculator::standard().evaluate(&request).unwrap();
    /// assert_eq!(response.final_balance.to_string(), "1161.82");
    /// ```
    pub fn evaluate(&self, request: &CalculationRequest) -> EngineResult<CalculationResponse> {
        let interest_accrued = self.calculate(
            &request.amount,
            &request.interest_rate,
            request.duration,
            request.accrual_type,
        )?;
        Ok(assemble_response(&request.amount, &interest_accrued))
    }
}
