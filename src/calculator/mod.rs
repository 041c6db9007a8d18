//! Checkout total calculation
//!
//! The single operation of this crate: validate the price, tax, and
//! discount arguments, convert them to exact decimals, apply the discount
//! and then the tax, and quantize the result.

use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{quantize_half_up, Numeric, Rounding, Total};
use crate::error::{Error, Field, Result};

/// Calculate the total for a base price with tax and an optional discount.
///
/// The discount is applied first, then the tax:
///
/// ```text
/// discounted = price * (1 - discount)
/// total      = discounted * (1 + tax)
/// ```
///
/// `price` must be non-negative; `tax` and `discount` are fractional rates
/// in `[0, 1]` inclusive. All arithmetic is exact decimal; binary floats
/// are converted through their shortest decimal text form first, so a
/// float argument contributes its written value, not its binary
/// approximation.
///
/// # Examples
///
/// ```
/// use total_calculator::{calculate_total, Rounding};
/// use rust_decimal_macros::dec;
///
/// let total = calculate_total(100, 0.1, 0, Rounding::default()).unwrap();
/// assert_eq!(total, dec!(110.00));
///
/// let total = calculate_total(100, 0.1, 0.2, Rounding::default()).unwrap();
/// assert_eq!(total, dec!(88.00));
/// ```
pub fn calculate_total(
    price: impl Into<Numeric>,
    tax: impl Into<Numeric>,
    discount: impl Into<Numeric>,
    rounding: Rounding,
) -> Result<Total> {
    let price = price.into();
    let tax = tax.into();
    let discount = discount.into();

    // Finiteness and conversion are checked for every argument before any
    // range is examined, so a non-finite tax is reported ahead of a
    // negative price.
    let price_d = price.to_decimal(Field::Price)?;
    let tax_d = tax.to_decimal(Field::Tax)?;
    let discount_d = discount.to_decimal(Field::Discount)?;

    if price_d < Decimal::ZERO {
        return Err(Error::InvalidValue {
            field: Field::Price,
            constraint: "must be non-negative".to_string(),
            value: price.to_string(),
        });
    }
    if tax_d < Decimal::ZERO || tax_d > Decimal::ONE {
        return Err(Error::InvalidValue {
            field: Field::Tax,
            constraint: "must be between 0 and 1".to_string(),
            value: tax.to_string(),
        });
    }
    if discount_d < Decimal::ZERO || discount_d > Decimal::ONE {
        return Err(Error::InvalidValue {
            field: Field::Discount,
            constraint: "must be between 0 and 1".to_string(),
            value: discount.to_string(),
        });
    }

    // Discount strictly before tax
    let discounted = price_d
        .checked_mul(Decimal::ONE - discount_d)
        .ok_or_else(|| overflow(price))?;
    let total = discounted
        .checked_mul(Decimal::ONE + tax_d)
        .ok_or_else(|| overflow(price))?;

    let total = match rounding {
        Rounding::Places(places) => quantize_half_up(total, places),
        Rounding::Exact => total,
    };

    debug!(
        "total for price={} tax={} discount={}: {}",
        price, tax, discount, total
    );

    Ok(total)
}

/// Calculate a total with no discount, rounded to two decimal places.
pub fn calculate_total_default(
    price: impl Into<Numeric>,
    tax: impl Into<Numeric>,
) -> Result<Total> {
    calculate_total(price, tax, 0, Rounding::default())
}

fn overflow(price: Numeric) -> Error {
    Error::InvalidValue {
        field: Field::Price,
        constraint: "produces a total outside the representable decimal range".to_string(),
        value: price.to_string(),
    }
}
