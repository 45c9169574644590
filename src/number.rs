//! Decimal value type and the arithmetic primitives shared by the built-in
//! operators and functions.
//!
//! Addition, subtraction and multiplication are exact. Division rounds to
//! [`DIVISION_PRECISION`] significant digits. Everything else goes through
//! `f64` and back.

use crate::error::DomainError;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::str::FromStr;

pub type Number = BigDecimal;

/// Significant digits kept by [`divide`].
pub const DIVISION_PRECISION: u64 = 34;

/// Values bound to every new expression unless overwritten.
pub const DEFAULT_CONSTANTS: [(&str, &str); 4] = [
    ("pi", "3.141592653589793"),
    ("π", "3.141592653589793"),
    ("φ", "1.61803398874"),
    ("e", "2.718281828459045"),
];

pub fn parse(literal: &str) -> Option<Number> {
    BigDecimal::from_str(literal).ok()
}

pub fn to_f64(value: &Number) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Converts through the shortest decimal rendering of `value`, so `0.1`
/// stays `0.1` rather than its exact binary expansion.
pub fn from_f64(value: f64) -> Result<Number, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::new(format!("{} is not a finite number", value)));
    }
    BigDecimal::from_str(&value.to_string())
        .map_err(|e| DomainError::new(format!("Unable to represent {}: {}", value, e)))
}

/// Divides with a single half-up rounding to [`DIVISION_PRECISION`]
/// significant digits, computed from the exact remainder. Trailing zeros are
/// dropped down to the scale `left.scale - right.scale`.
pub fn divide(left: &Number, right: &Number) -> Result<Number, DomainError> {
    if right.is_zero() {
        return Err(DomainError::new("Division by zero!"));
    }
    if left.is_zero() {
        return Ok(Number::zero());
    }

    let (dividend, dividend_scale) = left.as_bigint_and_exponent();
    let (divisor, divisor_scale) = right.as_bigint_and_exponent();
    let negative = dividend.sign() != divisor.sign();
    let (dividend, divisor) = (dividend.abs(), divisor.abs());
    let precision = DIVISION_PRECISION as i64;

    // the integer quotient has `precision` or `precision + 1` digits at this shift
    let mut shift = precision + digits(&divisor) - digits(&dividend);
    let (mut quotient, remainder, denominator) = loop {
        let (numerator, denominator) = if shift >= 0 {
            (dividend.clone() * pow10(shift), divisor.clone())
        } else {
            (dividend.clone(), divisor.clone() * pow10(-shift))
        };
        let quotient = &numerator / &denominator;
        if digits(&quotient) > precision {
            shift -= 1;
            continue;
        }
        let remainder = numerator - &quotient * &denominator;
        break (quotient, remainder, denominator);
    };
    let mut scale = dividend_scale - divisor_scale + shift;

    if remainder * 2 >= denominator {
        quotient += 1;
        if digits(&quotient) > precision {
            quotient /= 10;
            scale -= 1;
        }
    }

    let preferred_scale = dividend_scale - divisor_scale;
    let ten = BigInt::from(10);
    while scale > preferred_scale && (&quotient % &ten).is_zero() {
        quotient /= 10;
        scale -= 1;
    }

    if negative {
        quotient = -quotient;
    }
    Ok(BigDecimal::new(quotient, scale))
}

fn digits(value: &BigInt) -> i64 {
    value.magnitude().to_str_radix(10).len() as i64
}

fn pow10(exponent: i64) -> BigInt {
    BigInt::from(10).pow(exponent as u32)
}

pub fn modulo(left: &Number, right: &Number) -> Result<Number, DomainError> {
    if right.is_zero() {
        return Err(DomainError::new("Division by zero!"));
    }
    from_f64(to_f64(left) % to_f64(right))
}

pub fn power(base: &Number, exponent: &Number) -> Result<Number, DomainError> {
    from_f64(to_f64(base).powf(to_f64(exponent)))
}
