//! Error types for total calculation
//!
//! Exactly two failure kinds exist: an argument whose runtime
//! representation is not numeric, and an argument whose value is outside
//! its allowed domain. Every error names the offending argument so callers
//! can report which input to fix.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The calculator argument a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Price,
    Tax,
    Discount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Price => "price",
            Field::Tax => "tax",
            Field::Discount => "discount",
        };
        f.write_str(name)
    }
}

/// Calculation error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument's runtime representation is not an accepted numeric kind
    #[error("{field} must be a number, got {kind}")]
    InvalidType { field: Field, kind: String },

    /// An argument is numerically outside its allowed domain
    #[error("{field} {constraint}, got {value}")]
    InvalidValue {
        field: Field,
        constraint: String,
        value: String,
    },
}

impl Error {
    /// The argument this error refers to
    pub fn field(&self) -> Field {
        match self {
            Error::InvalidType { field, .. } => *field,
            Error::InvalidValue { field, .. } => *field,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
