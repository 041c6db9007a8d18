//! Decimal type utilities for precise monetary calculations

use std::fmt;
use std::str::FromStr;

pub use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
pub use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Field, Result};

/// Computed total with exact precision
pub type Total = Decimal;

/// An input value in one of the accepted numeric representations.
///
/// Integers, binary floats, and exact decimals are accepted; a closed sum
/// type over the three rejects every other representation at construction
/// time instead of at call time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Numeric {
    /// Construct from an untyped JSON value, rejecting non-numeric kinds.
    ///
    /// This is the only deserialization path for `Numeric`; going through
    /// it keeps the offending field name attached to type failures.
    pub fn from_value(field: Field, value: &Value) -> Result<Numeric> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Numeric::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    // Beyond i64 but still an exact integer
                    Ok(Numeric::Decimal(Decimal::from(u)))
                } else {
                    // A JSON number always has an f64 form
                    Ok(Numeric::Float(n.as_f64().unwrap_or_default()))
                }
            }
            other => Err(Error::InvalidType {
                field,
                kind: json_kind(other).to_string(),
            }),
        }
    }

    /// Convert to an exact decimal via the value's canonical text form.
    ///
    /// Floats are formatted with their shortest round-trip representation
    /// and that text is re-parsed as decimal, so `0.1f64` becomes exactly
    /// `0.1` rather than its nearest binary approximation. Non-finite
    /// floats are rejected here; `Decimal` has no non-finite encodings, so
    /// the other variants pass through unchanged.
    pub fn to_decimal(self, field: Field) -> Result<Decimal> {
        match self {
            Numeric::Integer(i) => Ok(Decimal::from(i)),
            Numeric::Float(f) => {
                if !f.is_finite() {
                    return Err(Error::InvalidValue {
                        field,
                        constraint: "must be a finite number".to_string(),
                        value: self.to_string(),
                    });
                }
                Decimal::from_str(&f.to_string()).map_err(|_| Error::InvalidValue {
                    field,
                    constraint: "must be within the representable decimal range".to_string(),
                    value: self.to_string(),
                })
            }
            Numeric::Decimal(d) => Ok(d),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(i) => write!(f, "{}", i),
            Numeric::Float(x) => write!(f, "{}", x),
            Numeric::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl From<i64> for Numeric {
    fn from(v: i64) -> Self {
        Numeric::Integer(v)
    }
}

impl From<i32> for Numeric {
    fn from(v: i32) -> Self {
        Numeric::Integer(v.into())
    }
}

impl From<u32> for Numeric {
    fn from(v: u32) -> Self {
        Numeric::Integer(v.into())
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Float(v)
    }
}

impl From<Decimal> for Numeric {
    fn from(v: Decimal) -> Self {
        Numeric::Decimal(v)
    }
}

/// How the computed total is quantized before being returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Quantize to this many fractional digits, rounding ties away from zero
    Places(u32),
    /// Return the exact unrounded value
    Exact,
}

impl Default for Rounding {
    /// Two fractional digits, the usual scale for currency amounts
    fn default() -> Self {
        Rounding::Places(2)
    }
}

/// Quantize to `places` fractional digits using half-up rounding.
///
/// `round_dp_with_strategy` only ever reduces scale; the rescale
/// afterwards pads zeros so the result carries exactly `places` digits
/// (`110` quantized to two places renders as `110.00`).
pub fn quantize_half_up(value: Decimal, places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
