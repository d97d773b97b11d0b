//! Interest Calculator
//!
//! This crate computes simple, annual compound and daily compound interest
//! on a principal and exposes the calculation over HTTP as
//! `GET /interest/calculate`.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
