//! Exact decimal helpers shared by amounts and exchange rates.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Zero};
use rust_decimal::Decimal;

use crate::config::ArithmeticContext;
use crate::error::{MonetaryError, Result};

/// Values that convert losslessly into an arbitrary-precision decimal.
///
/// Implemented for every primitive integer, for [`BigDecimal`] and for
/// [`rust_decimal::Decimal`]. Strings and floats are fallible and go through
/// [`parse`] and [`from_f64`] instead.
pub trait IntoDecimal {
    /// Convert into a [`BigDecimal`].
    fn into_decimal(self) -> BigDecimal;
}

macro_rules! impl_into_decimal_int {
    ($($int_type:ty),*) => {
        $(
            impl IntoDecimal for $int_type {
                fn into_decimal(self) -> BigDecimal {
                    BigDecimal::new(BigInt::from(self), 0)
                }
            }
        )*
    };
}

impl_into_decimal_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoDecimal for BigDecimal {
    fn into_decimal(self) -> BigDecimal {
        self
    }
}

impl IntoDecimal for &BigDecimal {
    fn into_decimal(self) -> BigDecimal {
        self.clone()
    }
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.mantissa()), i64::from(self.scale()))
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> BigDecimal {
        (*self).into_decimal()
    }
}

/// Exactly `10^exp`, for negative exponents too.
pub fn pow10(exp: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -exp)
}

/// Multiply by `10^exp` without rounding.
pub fn shift(value: &BigDecimal, exp: i64) -> BigDecimal {
    value * pow10(exp)
}

/// Strip trailing zeros while keeping integers in positional form.
pub fn trim(value: BigDecimal) -> BigDecimal {
    let value = value.normalized();
    if value.fractional_digit_count() < 0 {
        value.with_scale(0)
    } else {
        value
    }
}

/// Plain (never exponential) string of the trimmed value.
pub fn to_plain(value: &BigDecimal) -> String {
    trim(value.clone()).to_plain_string()
}

/// Divide, rounding non-terminating quotients to the context's precision.
pub fn divide(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    context: &ArithmeticContext,
) -> Result<BigDecimal> {
    if divisor.is_zero() {
        return Err(MonetaryError::DivisionByZero);
    }
    let quotient = dividend / divisor;
    Ok(quotient.with_precision_round(context.precision(), context.rounding))
}

/// Parse a decimal string such as `"-15.5"` or `"1e-3"`.
pub fn parse(value: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(value.trim())
        .map_err(|e| MonetaryError::InvalidAmount(format!("{value:?}: {e}")))
}

/// Convert a float through its shortest round-trip decimal representation.
pub fn from_f64(value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(MonetaryError::InvalidAmount(value.to_string()));
    }
    parse(&value.to_string())
}

/// Convert into a `rust_decimal::Decimal`, failing instead of rounding.
pub fn to_rust_decimal(value: &BigDecimal) -> Result<Decimal> {
    let plain = to_plain(value);
    Decimal::from_str_exact(&plain)
        .map_err(|e| MonetaryError::NotRepresentable(format!("{plain}: {e}")))
}
