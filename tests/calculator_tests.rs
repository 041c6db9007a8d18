use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use total_calculator::decimal::quantize_half_up;
use total_calculator::{calculate_total, calculate_total_default, Rounding};

#[test]
fn test_basic_tax() {
    let total = calculate_total_default(100, 0.1).unwrap();
    assert_eq!(total, dec!(110.00));
    assert_eq!(total.to_string(), "110.00");
}

#[test]
fn test_discount_applied_before_tax() {
    // 100 * (1 - 0.2) = 80, then 80 * 1.1 = 88
    let total = calculate_total(100, 0.1, 0.2, Rounding::default()).unwrap();
    assert_eq!(total, dec!(88.00));
    assert_eq!(total.to_string(), "88.00");
}

#[test]
fn test_zero_price() {
    let total = calculate_total_default(0, 0.5).unwrap();
    assert_eq!(total, dec!(0.00));
    assert_eq!(total.to_string(), "0.00");
}

#[test]
fn test_half_up_rounding() {
    // 19.99 * 1.0825 = 21.639175, which rounds up at two places
    let total = calculate_total_default(19.99, 0.0825).unwrap();
    assert_eq!(total, dec!(21.64));
}

#[test]
fn test_midpoint_rounds_away_from_zero() {
    // 2.5 * 1.05 = 2.625 exactly; half-up gives 2.63 where
    // banker's rounding would give 2.62
    let total = calculate_total_default(2.5, 0.05).unwrap();
    assert_eq!(total, dec!(2.63));
}

#[test]
fn test_zero_places_yields_integral_total() {
    let total = calculate_total(19.99, 0.0825, 0, Rounding::Places(0)).unwrap();
    assert_eq!(total, dec!(22));
    assert_eq!(total.to_string(), "22");
}

#[test]
fn test_exact_skips_rounding() {
    let total = calculate_total(100, 0.1, 0, Rounding::Exact).unwrap();
    // Numerically 110; the raw product keeps the scale of its factors
    assert_eq!(total, dec!(110));
    assert_eq!(total.to_string(), "110.0");
}

#[test]
fn test_exact_then_half_up_matches_places() {
    let exact = calculate_total(19.99, 0.0825, 0.15, Rounding::Exact).unwrap();
    let rounded = calculate_total(19.99, 0.0825, 0.15, Rounding::Places(2)).unwrap();
    assert_eq!(quantize_half_up(exact, 2), rounded);
}

#[test]
fn test_identity_when_rates_are_zero() {
    for price in [dec!(0), dec!(1), dec!(19.99), dec!(123.456)] {
        let total = calculate_total(price, 0, 0, Rounding::Places(2)).unwrap();
        assert_eq!(total, quantize_half_up(price, 2));
    }
}

#[test]
fn test_matches_closed_formula() {
    let cases = [
        (dec!(100), dec!(0.1), dec!(0.2)),
        (dec!(19.99), dec!(0.0825), dec!(0)),
        (dec!(59.95), dec!(0.07), dec!(0.33)),
    ];
    for (price, tax, discount) in cases {
        let total = calculate_total(price, tax, discount, Rounding::Exact).unwrap();
        let expected = price * (Decimal::ONE - discount) * (Decimal::ONE + tax);
        assert_eq!(total, expected);
    }
}

#[test]
fn test_rounding_is_idempotent() {
    let once = calculate_total_default(19.99, 0.0825).unwrap();
    let twice = calculate_total(once, 0, 0, Rounding::Places(2)).unwrap();
    assert_eq!(once, twice);
    assert_eq!(quantize_half_up(once, 2), once);
}

#[test]
fn test_decimal_inputs() {
    let total = calculate_total(dec!(19.99), dec!(0.0825), dec!(0), Rounding::Places(2)).unwrap();
    assert_eq!(total, dec!(21.64));
}

#[test]
fn test_float_converts_through_decimal_text() {
    // 0.1f64 is not exactly representable in binary, but its shortest
    // decimal form is "0.1" and that is what enters the arithmetic
    let total = calculate_total(0.1, 0, 0, Rounding::Exact).unwrap();
    assert_eq!(total, dec!(0.1));
}

#[test]
fn test_large_integer_price() {
    let total = calculate_total(i64::MAX, 0, 0, Rounding::Exact).unwrap();
    assert_eq!(total, Decimal::from(i64::MAX));
}
