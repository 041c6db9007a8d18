//! Exact-decimal checkout total calculation
//!
//! This library computes a final monetary total from a base price, a tax
//! rate, and an optional discount rate. All arithmetic after validation
//! runs on `rust_decimal::Decimal` values, so results never carry binary
//! floating-point rounding artifacts and quantization is reproducible.

pub mod calculator;
pub mod decimal;
pub mod error;

/// Re-export important types
pub use calculator::{calculate_total, calculate_total_default};
pub use decimal::{Decimal, Numeric, Rounding, Total};
pub use error::{Error, Field, Result};
