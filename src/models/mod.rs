//! Core data models for the Interest Calculator.
//!
//! This module contains the domain models shared by validation, calculation
//! and the HTTP API.

mod accrual_type;
mod calculation;
mod error_item;
mod money;

pub use accrual_type::{AccrualType, ParseAccrualTypeError};
pub use calculation::{CalculationRequest, CalculationResponse};
pub use error_item::ErrorItem;
pub use money::{MONEY_SCALE, fractional_digits, json_number, round_half_up, round_money};
