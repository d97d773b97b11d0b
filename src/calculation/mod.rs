//! Calculation logic for the Interest Calculator.
//!
//! This module contains the interest strategies (simple, annual compound and
//! daily compound), the [`InterestCalculator`] that selects between them,
//! and assembly of the final response triple.

mod assembly;
mod calculator;
mod compound_interest;
mod daily_interest;
mod growth;
mod simple_interest;

pub use assembly::assemble_response;
pub use calculator::{InterestCalculator, InterestStrategy};
pub use compound_interest::calculate_compound_interest;
pub use daily_interest::{DAILY_RATE_SCALE, DAYS_IN_YEAR, calculate_daily_interest, daily_rate};
pub use simple_interest::calculate_simple_interest;
