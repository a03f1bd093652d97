//! Arbitrary-precision monetary amounts.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU64;
use std::ops::{Add, Div, Mul, Sub};
use std::sync::Arc;

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ArithmeticContext;
use crate::currency::Currency;
use crate::decimal::{self, IntoDecimal};
use crate::error::{MonetaryError, Result};
use crate::unit::{Denomination, ATOMIC};

/// An exact amount of one currency.
///
/// The value is stored in atomic units and may carry a fraction of an
/// atomic unit, so chained `mul`/`div` never compound rounding errors.
/// Everything observable from outside (`to_big`, `to_string_in`,
/// comparisons, `is_zero`) works on the value rounded to whole atomic
/// units with the amount's rounding mode.
///
/// Amounts are immutable: every operation returns a new value.
#[derive(Debug, Clone)]
pub struct MonetaryAmount {
    currency: Arc<Currency>,
    amount: BigDecimal,
    context: ArithmeticContext,
}

impl MonetaryAmount {
    /// Create an amount from a value in atomic units.
    pub fn new(currency: Arc<Currency>, amount: impl IntoDecimal) -> Self {
        Self::from_unit(currency, amount, ATOMIC)
    }

    /// Create an amount from a value expressed in `unit`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use monetary_common::{Currency, MonetaryAmount};
    ///
    /// let btc = Arc::new(
    ///     Currency::builder("Bitcoin").unit("BTC", 8).unit("Satoshi", 0).build().unwrap(),
    /// );
    /// let amount = MonetaryAmount::from_unit(btc, 2, 8u32);
    /// assert_eq!(amount.to_string(), "200000000");
    /// ```
    pub fn from_unit(currency: Arc<Currency>, amount: impl IntoDecimal, unit: impl Denomination) -> Self {
        let atomic = decimal::shift(&amount.into_decimal(), i64::from(unit.exponent()));
        Self {
            currency,
            amount: atomic,
            context: ArithmeticContext::default(),
        }
    }

    /// Parse a decimal string expressed in `unit`.
    pub fn parse(currency: Arc<Currency>, amount: &str, unit: impl Denomination) -> Result<Self> {
        Ok(Self::from_unit(currency, decimal::parse(amount)?, unit))
    }

    /// Create an amount from a float expressed in `unit`.
    pub fn from_f64(currency: Arc<Currency>, amount: f64, unit: impl Denomination) -> Result<Self> {
        Ok(Self::from_unit(currency, decimal::from_f64(amount)?, unit))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Arc<Currency>) -> Self {
        Self::new(currency, BigDecimal::zero())
    }

    /// Get the currency.
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Unrounded internal value in atomic units, sub-atomic fraction included.
    pub fn raw_amount(&self) -> &BigDecimal {
        &self.amount
    }

    /// Get the arithmetic context.
    pub fn context(&self) -> ArithmeticContext {
        self.context
    }

    /// Get the rounding mode used for projections and comparisons.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.context.rounding
    }

    /// Same amount with a different arithmetic context.
    pub fn with_context(mut self, context: ArithmeticContext) -> Self {
        self.context = context;
        self
    }

    /// Same amount with a different rounding mode.
    pub fn with_rounding_mode(mut self, rounding: RoundingMode) -> Self {
        self.context.rounding = rounding;
        self
    }

    /// New amount of the same currency and context, from a value in the base unit.
    pub fn with_amount(&self, amount: impl IntoDecimal) -> Self {
        let atomic = decimal::shift(&amount.into_decimal(), i64::from(self.currency.base()));
        self.with_atomic_amount(atomic)
    }

    /// New amount of the same currency and context, from a value in atomic units.
    pub fn with_atomic_amount(&self, amount: impl IntoDecimal) -> Self {
        Self {
            currency: Arc::clone(&self.currency),
            amount: amount.into_decimal(),
            context: self.context,
        }
    }

    fn integer_amount(&self, rounding: RoundingMode) -> BigDecimal {
        self.amount.with_scale_round(0, rounding)
    }

    /// Value in `unit`, rounded to whole atomic units.
    pub fn to_big(&self, unit: impl Denomination) -> BigDecimal {
        self.to_big_with(unit, self.context.rounding)
    }

    /// Value in `unit`, rounded to whole atomic units with `rounding`.
    pub fn to_big_with(&self, unit: impl Denomination, rounding: RoundingMode) -> BigDecimal {
        let exponent = i64::from(unit.exponent());
        let projected = decimal::shift(&self.amount, -exponent);
        decimal::trim(projected.with_scale_round(exponent, rounding))
    }

    /// String of [`to_big`](Self::to_big).
    pub fn to_string_in(&self, unit: impl Denomination) -> String {
        decimal::to_plain(&self.to_big(unit))
    }

    /// String of [`to_big_with`](Self::to_big_with).
    pub fn to_string_with(&self, unit: impl Denomination, rounding: RoundingMode) -> String {
        decimal::to_plain(&self.to_big_with(unit, rounding))
    }

    /// Value in the base unit, rounded to the currency's display precision.
    ///
    /// Unrounded (beyond atomic precision) if the currency declares none.
    pub fn to_human(&self) -> String {
        match self.currency.human_decimals() {
            Some(decimals) => self.to_human_with(i64::from(decimals)),
            None => self.to_string_in(self.currency.base()),
        }
    }

    /// Value in the base unit, rounded to `decimals` places.
    ///
    /// A nonzero amount that would round to zero keeps its first
    /// significant digit instead.
    pub fn to_human_with(&self, decimals: i64) -> String {
        let value = self.to_big(self.currency.base());
        let rounded = value.with_scale_round(decimals, self.context.rounding);
        if rounded.is_zero() && !value.is_zero() {
            let significant = value.with_precision_round(NonZeroU64::MIN, self.context.rounding);
            return decimal::to_plain(&significant);
        }
        decimal::to_plain(&rounded)
    }

    /// Value in the unit named `unit`.
    pub fn to(&self, unit: &str) -> Result<BigDecimal> {
        let unit = self.currency.unit(unit)?;
        Ok(self.to_big(unit))
    }

    /// String of the value in the unit named `unit`.
    pub fn str(&self, unit: &str) -> Result<String> {
        let unit = self.currency.unit(unit)?;
        Ok(self.to_string_in(unit))
    }

    /// Value in every unit of the currency, largest unit first.
    pub fn conversions(&self) -> Vec<(&str, BigDecimal)> {
        self.currency
            .units()
            .iter()
            .map(|unit| (unit.name(), self.to_big(unit)))
            .collect()
    }

    /// Value in `unit` as a `rust_decimal::Decimal`.
    pub fn to_decimal(&self, unit: impl Denomination) -> Result<Decimal> {
        decimal::to_rust_decimal(&self.to_big(unit))
    }

    /// Check if the amount rounds to zero atomic units.
    pub fn is_zero(&self) -> bool {
        self.integer_amount(self.context.rounding).is_zero()
    }

    /// Check if the amount rounds to a negative number of atomic units.
    pub fn is_negative(&self) -> bool {
        self.integer_amount(self.context.rounding) < BigDecimal::zero()
    }

    /// Check if the amount rounds to a positive number of atomic units.
    pub fn is_positive(&self) -> bool {
        self.integer_amount(self.context.rounding) > BigDecimal::zero()
    }

    fn ensure_same_currency(&self, operation: &'static str, other: &Self) -> Result<()> {
        if self.currency.is_same(&other.currency) {
            return Ok(());
        }
        debug!(
            operation,
            expected = %self.currency,
            actual = %other.currency,
            "Rejected cross-currency operation"
        );
        Err(MonetaryError::mismatch(
            operation,
            self.currency.name(),
            other.currency.name(),
        ))
    }

    /// Compare whole atomic units using this amount's rounding mode.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.try_cmp_with(other, self.context.rounding)
    }

    /// Compare whole atomic units using `rounding` for both sides.
    pub fn try_cmp_with(&self, other: &Self, rounding: RoundingMode) -> Result<Ordering> {
        self.ensure_same_currency("compare", other)?;
        Ok(self.integer_amount(rounding).cmp(&other.integer_amount(rounding)))
    }

    /// Equal after rounding to atomic units.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// Greater after rounding to atomic units.
    pub fn try_gt(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// Greater or equal after rounding to atomic units.
    pub fn try_gte(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }

    /// Less after rounding to atomic units.
    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// Less or equal after rounding to atomic units.
    pub fn try_lte(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }

    /// The lesser amount. Returns `self` on a tie.
    pub fn min(self, other: Self) -> Result<Self> {
        Ok(if other.try_lt(&self)? { other } else { self })
    }

    /// The greater amount. Returns `self` on a tie.
    pub fn max(self, other: Self) -> Result<Self> {
        Ok(if other.try_gt(&self)? { other } else { self })
    }

    /// Exact sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_currency("add", other)?;
        Ok(self.with_atomic_amount(&self.amount + &other.amount))
    }

    /// Exact difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_currency("subtract", other)?;
        Ok(self.with_atomic_amount(&self.amount - &other.amount))
    }

    /// Exact product with a scalar.
    pub fn mul(&self, multiplier: impl IntoDecimal) -> Self {
        self.with_atomic_amount(&self.amount * multiplier.into_decimal())
    }

    /// Quotient by a scalar, keeping the sub-atomic fraction.
    pub fn div(&self, divisor: impl IntoDecimal) -> Result<Self> {
        let quotient = decimal::divide(&self.amount, &divisor.into_decimal(), &self.context)?;
        Ok(self.with_atomic_amount(quotient))
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_in(ATOMIC))
    }
}

impl PartialEq for MonetaryAmount {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for MonetaryAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Add for &MonetaryAmount {
    type Output = Result<MonetaryAmount>;

    fn add(self, other: Self) -> Self::Output {
        MonetaryAmount::add(self, other)
    }
}

impl Sub for &MonetaryAmount {
    type Output = Result<MonetaryAmount>;

    fn sub(self, other: Self) -> Self::Output {
        MonetaryAmount::sub(self, other)
    }
}

impl<S: IntoDecimal> Mul<S> for &MonetaryAmount {
    type Output = MonetaryAmount;

    fn mul(self, multiplier: S) -> Self::Output {
        MonetaryAmount::mul(self, multiplier)
    }
}

impl<S: IntoDecimal> Div<S> for &MonetaryAmount {
    type Output = Result<MonetaryAmount>;

    fn div(self, divisor: S) -> Self::Output {
        MonetaryAmount::div(self, divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{parse, pow10, shift};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    crate::denominations! {
        enum DummyUnit {
            Base = ("Base", 10),
            Intermediate = ("Intermediate", 5),
            Integer = ("Integer", 0),
        }
    }

    crate::denominations! {
        enum BitcoinUnit {
            Btc = ("BTC", 8),
            Satoshi = ("Satoshi", 0),
        }
    }

    fn dummy() -> Arc<Currency> {
        Arc::new(
            Currency::builder("Dummy")
                .units(DummyUnit::ALL.iter().copied())
                .base(DummyUnit::Base)
                .human_decimals(3)
                .build()
                .unwrap(),
        )
    }

    fn bitcoin() -> Arc<Currency> {
        Arc::new(
            Currency::builder("Bitcoin")
                .units(BitcoinUnit::ALL.iter().copied())
                .base(BitcoinUnit::Btc)
                .human_decimals(5)
                .ticker("BTC")
                .build()
                .unwrap(),
        )
    }

    fn ethereum() -> Arc<Currency> {
        Arc::new(
            Currency::builder("Ethereum")
                .unit("ETH", 18)
                .unit("GWei", 9)
                .unit("Wei", 0)
                .build()
                .unwrap(),
        )
    }

    fn amount(value: &str) -> MonetaryAmount {
        MonetaryAmount::parse(dummy(), value, ATOMIC).unwrap()
    }

    #[test]
    fn test_default_unit_is_atomic() {
        let value = MonetaryAmount::new(dummy(), 12345);
        assert_eq!(value.to_string(), "12345");
        assert_eq!(value.to_big(ATOMIC), BigDecimal::from(12345));
    }

    #[test]
    fn test_construct_from_units() {
        assert_eq!(
            MonetaryAmount::from_unit(dummy(), 7, DummyUnit::Base).to_string(),
            "70000000000"
        );
        assert_eq!(
            MonetaryAmount::from_unit(dummy(), -3, DummyUnit::Intermediate).to_string(),
            "-300000"
        );
        assert_eq!(
            MonetaryAmount::from_unit(dummy(), 9, DummyUnit::Integer).to_string(),
            "9"
        );
    }

    #[test]
    fn test_format_to_units() {
        let value = MonetaryAmount::new(dummy(), 123_456_789);

        assert_eq!(value.to_string_in(DummyUnit::Intermediate), "1234.56789");
        assert_eq!(value.to_string_in(DummyUnit::Base), "0.0123456789");
        assert_eq!(value.to_string_in(DummyUnit::Integer), "123456789");
    }

    #[test]
    fn test_bitcoin_scenario() {
        let value = MonetaryAmount::from_unit(bitcoin(), dec!(1.5), BitcoinUnit::Btc);

        assert_eq!(value.raw_amount(), &BigDecimal::from(150_000_000));
        assert_eq!(value.to_big(BitcoinUnit::Satoshi), BigDecimal::from(150_000_000));
        assert_eq!(value.to("Satoshi").unwrap(), BigDecimal::from(150_000_000));
        assert_eq!(value.str("BTC").unwrap(), "1.5");
        assert_eq!(value.to_human(), "1.5");
    }

    #[test]
    fn test_projection_rounds_to_atomic_units() {
        let half = amount("0.5");

        assert_eq!(half.to_string(), "1");
        assert_eq!(half.to_string_with(ATOMIC, RoundingMode::HalfEven), "0");
        assert_eq!(half.clone().with_rounding_mode(RoundingMode::Down).to_string(), "0");

        let value = amount("123456.7");
        assert_eq!(value.to_string_in(DummyUnit::Intermediate), "1.23457");
        assert_eq!(
            value.to_string_with(DummyUnit::Intermediate, RoundingMode::Down),
            "1.23456"
        );
    }

    #[test]
    fn test_sub_atomic_remainder_is_zero_but_retained() {
        let tiny = amount("0.3");

        assert!(tiny.is_zero());
        assert_eq!(tiny.to_string(), "0");
        assert_eq!(tiny.raw_amount(), &parse("0.3").unwrap());

        let scaled = tiny.mul(10);
        assert!(!scaled.is_zero());
        assert_eq!(scaled.to_string(), "3");
    }

    #[test]
    fn test_to_human() {
        let value = MonetaryAmount::new(dummy(), 123_456_789);
        assert_eq!(value.to_human(), "0.012");
        assert_eq!(value.to_human_with(6), "0.012346");
        assert_eq!(value.to_human_with(20), "0.0123456789");

        let whole = MonetaryAmount::from_unit(dummy(), 12_345, DummyUnit::Base);
        assert_eq!(whole.to_human_with(-2), "12300");
        assert_eq!(whole.to_human(), "12345");
    }

    #[test]
    fn test_to_human_never_hides_nonzero_amounts() {
        let dust = MonetaryAmount::new(dummy(), 4);
        assert_eq!(dust.to_human(), "0.0000000004");

        let dust = MonetaryAmount::new(dummy(), 46_000);
        assert_eq!(dust.to_human(), "0.000005");

        assert_eq!(MonetaryAmount::zero(dummy()).to_human(), "0");
        assert_eq!(amount("0.3").to_human(), "0");
    }

    #[test]
    fn test_to_human_without_display_precision() {
        let value = MonetaryAmount::new(ethereum(), 1_234_567_890_123_456_789u64);
        assert_eq!(value.to_human(), "1.234567890123456789");
    }

    #[test]
    fn test_comparisons() {
        let small = MonetaryAmount::new(dummy(), 100);
        let large = MonetaryAmount::new(dummy(), 200);

        assert!(small.try_lt(&large).unwrap());
        assert!(small.try_lte(&large).unwrap());
        assert!(large.try_gt(&small).unwrap());
        assert!(large.try_gte(&small).unwrap());
        assert!(!small.try_eq(&large).unwrap());
        assert!(small.try_gte(&small.clone()).unwrap());
        assert!(small < large);
        assert_ne!(small, large);
    }

    #[test]
    fn test_comparisons_use_rounded_values() {
        let exact = amount("100");
        let fractional = amount("100.4");

        assert!(exact.try_eq(&fractional).unwrap());
        assert_eq!(exact, fractional);
        assert_eq!(
            exact.try_cmp_with(&fractional, RoundingMode::Up).unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_add_and_sub_create_new_values() {
        let a = MonetaryAmount::new(dummy(), 150);
        let b = MonetaryAmount::new(dummy(), 50);

        assert_eq!(a.add(&b).unwrap().to_string(), "200");
        assert_eq!(a.sub(&b).unwrap().to_string(), "100");
        assert_eq!(b.sub(&a).unwrap().to_string(), "-100");
        assert_eq!(a.to_string(), "150");
        assert_eq!(b.to_string(), "50");
    }

    #[test]
    fn test_add_keeps_fractions() {
        let sum = amount("0.3").add(&amount("0.3")).unwrap();
        assert_eq!(sum.raw_amount(), &parse("0.6").unwrap());
        assert_eq!(sum.to_string(), "1");
    }

    #[test]
    fn test_currency_mismatch() {
        let btc = MonetaryAmount::new(bitcoin(), 1);
        let eth = MonetaryAmount::new(ethereum(), 1);

        let err = btc.add(&eth).unwrap_err();
        assert_eq!(
            err,
            MonetaryError::CurrencyMismatch {
                operation: "add",
                expected: "Bitcoin".to_string(),
                actual: "Ethereum".to_string(),
            }
        );
        assert!(btc.sub(&eth).is_err());
        assert!(btc.try_eq(&eth).is_err());
        assert!(btc.try_gt(&eth).is_err());
        assert!(btc.clone().min(eth.clone()).is_err());
        assert!(btc != eth);
        assert_eq!(btc.partial_cmp(&eth), None);
    }

    #[test]
    fn test_same_name_is_same_currency() {
        let native = MonetaryAmount::new(bitcoin(), 10);
        let other_descriptor = MonetaryAmount::new(
            Arc::new(Currency::builder("Bitcoin").unit("sat", 0).build().unwrap()),
            5,
        );

        assert_eq!(native.add(&other_descriptor).unwrap().to_string(), "15");
    }

    #[test]
    fn test_mul_and_div() {
        let value = MonetaryAmount::new(dummy(), 100);

        assert_eq!(value.mul(3).to_string(), "300");
        assert_eq!(value.mul(dec!(0.5)).to_string(), "50");
        assert_eq!(value.div(4).unwrap().to_string(), "25");

        let third = value.div(3).unwrap();
        assert_eq!(third.to_string(), "33");
        assert_eq!(third.mul(3).to_string(), "100");
    }

    #[test]
    fn test_div_by_zero() {
        let value = MonetaryAmount::new(dummy(), 1);
        assert_eq!(value.div(0).unwrap_err(), MonetaryError::DivisionByZero);
        assert_eq!(
            value.div(BigDecimal::zero()).unwrap_err().error_code(),
            "DIVISION_BY_ZERO"
        );
    }

    #[test]
    fn test_min_max_return_winner() {
        let small = MonetaryAmount::new(dummy(), 1);
        let large = MonetaryAmount::new(dummy(), 2);

        assert_eq!(small.clone().min(large.clone()).unwrap().to_string(), "1");
        assert_eq!(small.clone().max(large.clone()).unwrap().to_string(), "2");
        assert_eq!(large.clone().min(small.clone()).unwrap().to_string(), "1");

        let tie = amount("1.2");
        let winner = tie.clone().min(small).unwrap();
        assert_eq!(winner.raw_amount(), tie.raw_amount());
    }

    #[test]
    fn test_with_amount() {
        let value = MonetaryAmount::new(dummy(), 1).with_rounding_mode(RoundingMode::Down);

        let base = value.with_amount(2);
        assert_eq!(base.to_big(DummyUnit::Base), BigDecimal::from(2));
        assert_eq!(base.rounding_mode(), RoundingMode::Down);

        let atomic = value.with_atomic_amount(5);
        assert_eq!(atomic.to_string(), "5");
        assert_eq!(atomic.currency().name(), "Dummy");
    }

    #[test]
    fn test_unit_accessors() {
        let value = MonetaryAmount::new(dummy(), 123_456_789);

        for unit in DummyUnit::ALL {
            assert_eq!(value.to(unit.name()).unwrap(), value.to_big(unit));
            assert_eq!(value.str(unit.name()).unwrap(), value.to_string_in(unit));
        }
        assert!(matches!(
            value.to("Missing"),
            Err(MonetaryError::UnknownUnit { .. })
        ));

        let conversions = value.conversions();
        let names: Vec<&str> = conversions.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Base", "Intermediate", "Integer"]);
        assert_eq!(conversions[1].1, parse("1234.56789").unwrap());
    }

    #[test]
    fn test_to_decimal() {
        let value = MonetaryAmount::from_unit(bitcoin(), dec!(0.00012345), BitcoinUnit::Btc);
        assert_eq!(value.to_decimal(BitcoinUnit::Btc).unwrap(), dec!(0.00012345));
        assert_eq!(value.to_decimal(BitcoinUnit::Satoshi).unwrap(), dec!(12345));
    }

    #[test]
    fn test_parse_and_float_constructors() {
        let parsed = MonetaryAmount::parse(bitcoin(), "-15.5", BitcoinUnit::Btc).unwrap();
        assert_eq!(parsed.to_string_in(BitcoinUnit::Btc), "-15.5");
        assert!(parsed.is_negative());
        assert!(!parsed.is_positive());

        let float = MonetaryAmount::from_f64(bitcoin(), 1.5, BitcoinUnit::Btc).unwrap();
        assert_eq!(float.to_string(), "150000000");

        assert!(MonetaryAmount::parse(bitcoin(), "one", ATOMIC).is_err());
        assert!(MonetaryAmount::from_f64(bitcoin(), f64::NAN, ATOMIC).is_err());
    }

    #[test]
    fn test_operators() {
        let a = MonetaryAmount::new(dummy(), 10);
        let b = MonetaryAmount::new(dummy(), 4);

        assert_eq!((&a + &b).unwrap().to_string(), "14");
        assert_eq!((&a - &b).unwrap().to_string(), "6");
        assert_eq!((&a * 2).to_string(), "20");
        assert_eq!((&a / 4).unwrap().to_string(), "3");
        assert!((&a / 0).is_err());
    }

    #[test]
    fn test_context_is_inherited() {
        let context = ArithmeticContext::default().with_precision(4);
        let value = MonetaryAmount::new(dummy(), 2).with_context(context);

        let third = value.div(3).unwrap();
        assert_eq!(third.raw_amount(), &parse("0.6667").unwrap());
        assert_eq!(third.context(), context);
    }

    proptest! {
        #[test]
        fn prop_projection_matches_exact_scaling(raw in any::<i64>()) {
            let value = MonetaryAmount::new(dummy(), raw);
            for unit in DummyUnit::ALL {
                let expected = shift(&BigDecimal::from(raw), -i64::from(unit.exponent()));
                prop_assert_eq!(value.to_big(unit), expected);
            }
        }

        #[test]
        fn prop_construct_in_unit(raw in any::<i32>()) {
            for unit in DummyUnit::ALL {
                let value = MonetaryAmount::from_unit(dummy(), raw, unit);
                let expected = BigDecimal::from(raw) * pow10(i64::from(unit.exponent()));
                prop_assert_eq!(value.to_big(ATOMIC), expected);
            }
        }

        #[test]
        fn prop_addition_is_associative(x in any::<i64>(), y in any::<i64>(), z in any::<i64>()) {
            let (x, y, z) = (
                MonetaryAmount::new(dummy(), x),
                MonetaryAmount::new(dummy(), y),
                MonetaryAmount::new(dummy(), z),
            );
            let left = x.add(&y).unwrap().add(&z).unwrap();
            let right = x.add(&y.add(&z).unwrap()).unwrap();
            prop_assert_eq!(left.raw_amount(), right.raw_amount());
        }

        #[test]
        fn prop_zero_is_additive_identity(x in any::<i64>()) {
            let value = MonetaryAmount::new(dummy(), x);
            let sum = value.add(&MonetaryAmount::zero(dummy())).unwrap();
            prop_assert!(sum.try_eq(&value).unwrap());
            prop_assert_eq!(sum.to_string(), value.to_string());
        }

        #[test]
        fn prop_div_rounds_half_up(raw in any::<i32>(), divisor in any::<i32>().prop_filter("non-zero", |d| *d != 0)) {
            let value = MonetaryAmount::new(dummy(), raw);
            let expected = (BigDecimal::from(raw) / BigDecimal::from(divisor))
                .with_scale_round(0, RoundingMode::HalfUp);
            prop_assert_eq!(value.div(divisor).unwrap().to_string(), decimal::to_plain(&expected));
        }
    }
}
