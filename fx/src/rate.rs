//! Exchange rates between two currencies.

use std::cmp;
use std::fmt;
use std::sync::Arc;

use bigdecimal::{BigDecimal, RoundingMode};
use monetary_common::decimal::{self, IntoDecimal};
use monetary_common::{ArithmeticContext, Currency, Denomination, MonetaryAmount, ATOMIC};
use tracing::{debug, trace};

use crate::conversion::Conversion;
use crate::error::{FxError, FxResult};

/// Unit pairing a rate is expressed or viewed in.
///
/// `None` means the currency's base unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateUnits {
    /// Exponent of the base currency unit.
    pub base: Option<u32>,
    /// Exponent of the counter currency unit.
    pub counter: Option<u32>,
}

impl RateUnits {
    /// Explicit pairing.
    pub fn new(base: impl Denomination, counter: impl Denomination) -> Self {
        Self {
            base: Some(base.exponent()),
            counter: Some(counter.exponent()),
        }
    }

    /// Atomic unit of both currencies.
    pub fn atomic() -> Self {
        Self::new(ATOMIC, ATOMIC)
    }

    fn resolve(&self, base: &Currency, counter: &Currency) -> (u32, u32) {
        (
            self.base.unwrap_or_else(|| base.base()),
            self.counter.unwrap_or_else(|| counter.base()),
        )
    }
}

/// Price of one base currency unit in counter currency units.
///
/// The rate is normalized on construction to counter atomic units per
/// base atomic unit, so two rates describing the same price in different
/// denominations store the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    base: Arc<Currency>,
    counter: Arc<Currency>,
    rate: BigDecimal,
    context: ArithmeticContext,
}

impl ExchangeRate {
    /// Create a rate expressed in the base unit of each currency.
    pub fn new(base: Arc<Currency>, counter: Arc<Currency>, rate: impl IntoDecimal) -> Self {
        let (base_unit, counter_unit) = (base.base(), counter.base());
        Self::from_units(base, counter, rate, base_unit, counter_unit)
    }

    /// Create a rate expressed as `counter_unit` per one `base_unit`.
    pub fn from_units(
        base: Arc<Currency>,
        counter: Arc<Currency>,
        rate: impl IntoDecimal,
        base_unit: impl Denomination,
        counter_unit: impl Denomination,
    ) -> Self {
        let raw = rate.into_decimal();
        let (base_exp, counter_exp) = (base_unit.exponent(), counter_unit.exponent());
        let normalized = decimal::trim(decimal::shift(
            &raw,
            i64::from(counter_exp) - i64::from(base_exp),
        ));

        debug!(
            base = %base,
            counter = %counter,
            raw = %raw,
            normalized = %normalized,
            base_unit = base_exp,
            counter_unit = counter_exp,
            "Created exchange rate"
        );

        Self {
            base,
            counter,
            rate: normalized,
            context: ArithmeticContext::default(),
        }
    }

    /// Create a rate from a decimal string in the base unit of each currency.
    pub fn parse(base: Arc<Currency>, counter: Arc<Currency>, rate: &str) -> FxResult<Self> {
        Ok(Self::new(base, counter, decimal::parse(rate)?))
    }

    /// Start building a rate.
    pub fn builder() -> crate::builder::ExchangeRateBuilder {
        crate::builder::ExchangeRateBuilder::new()
    }

    /// Same rate with a different arithmetic context.
    pub fn with_context(mut self, context: ArithmeticContext) -> Self {
        self.context = context;
        self
    }

    /// Get the base currency.
    pub fn base(&self) -> &Arc<Currency> {
        &self.base
    }

    /// Get the counter currency.
    pub fn counter(&self) -> &Arc<Currency> {
        &self.counter
    }

    /// Get the arithmetic context.
    pub fn context(&self) -> ArithmeticContext {
        self.context
    }

    fn ensure_currency(expected: &Currency, amount: &MonetaryAmount) -> FxResult<()> {
        if expected.is_same(amount.currency()) {
            return Ok(());
        }
        debug!(
            expected = %expected,
            actual = %amount.currency(),
            "Rejected conversion of foreign amount"
        );
        Err(FxError::CurrencyMismatch {
            expected: expected.name().to_string(),
            actual: amount.currency().name().to_string(),
        })
    }

    /// Convert a counter currency amount into the base currency.
    pub fn to_base(&self, amount: &MonetaryAmount) -> FxResult<MonetaryAmount> {
        Self::ensure_currency(&self.counter, amount)?;
        let atomic = decimal::divide(amount.raw_amount(), &self.rate, &self.context)?;
        trace!(
            from = %self.counter,
            to = %self.base,
            input = %amount.raw_amount(),
            output = %atomic,
            "Converted to base"
        );
        Ok(MonetaryAmount::new(Arc::clone(&self.base), atomic).with_context(amount.context()))
    }

    /// Convert a base currency amount into the counter currency.
    pub fn to_counter(&self, amount: &MonetaryAmount) -> FxResult<MonetaryAmount> {
        Self::ensure_currency(&self.base, amount)?;
        let atomic = amount.raw_amount() * &self.rate;
        trace!(
            from = %self.base,
            to = %self.counter,
            input = %amount.raw_amount(),
            output = %atomic,
            "Converted to counter"
        );
        Ok(MonetaryAmount::new(Arc::clone(&self.counter), atomic).with_context(amount.context()))
    }

    /// Convert an amount of either currency into the other one.
    pub fn convert(&self, amount: &MonetaryAmount) -> FxResult<Conversion> {
        let output = if self.base.is_same(amount.currency()) {
            self.to_counter(amount)?
        } else if self.counter.is_same(amount.currency()) {
            self.to_base(amount)?
        } else {
            return Err(FxError::CurrencyMismatch {
                expected: format!("{} or {}", self.base, self.counter),
                actual: amount.currency().name().to_string(),
            });
        };
        Ok(Conversion::new(amount.clone(), output))
    }

    /// The opposite rate: base and counter swapped.
    pub fn inverse(&self) -> FxResult<Self> {
        let inverted = decimal::divide(&BigDecimal::from(1), &self.rate, &self.context)?;
        Ok(Self {
            base: Arc::clone(&self.counter),
            counter: Arc::clone(&self.base),
            rate: decimal::trim(inverted),
            context: self.context,
        })
    }

    /// Rate expressed in the given unit pairing.
    pub fn to_big(&self, units: RateUnits) -> BigDecimal {
        let (base_exp, counter_exp) = units.resolve(&self.base, &self.counter);
        decimal::trim(decimal::shift(
            &self.rate,
            i64::from(base_exp) - i64::from(counter_exp),
        ))
    }

    /// Rate in counter atomic units per base atomic unit.
    pub fn to_raw_big(&self) -> BigDecimal {
        self.to_big(RateUnits::atomic())
    }

    /// String of [`to_raw_big`](Self::to_raw_big).
    pub fn to_raw_string(&self) -> String {
        decimal::to_plain(&self.to_raw_big())
    }

    /// Rate in the given unit pairing as a string.
    ///
    /// With a `precision`, the value is rounded to that many decimal places
    /// and padded with trailing zeros. `rounding` defaults to the rate's
    /// context.
    pub fn to_string_in(
        &self,
        units: RateUnits,
        precision: Option<i64>,
        rounding: Option<RoundingMode>,
    ) -> String {
        let value = self.to_big(units);
        match precision {
            Some(places) => value
                .with_scale_round(places, rounding.unwrap_or(self.context.rounding))
                .to_plain_string(),
            None => decimal::to_plain(&value),
        }
    }

    /// Rate in base units, rounded for display.
    ///
    /// Defaults to the larger display precision of the two currencies.
    pub fn to_human(&self, precision: Option<i64>) -> String {
        let declared = match (self.base.human_decimals(), self.counter.human_decimals()) {
            (Some(base), Some(counter)) => Some(cmp::max(base, counter)),
            (base, counter) => base.or(counter),
        };
        let value = self.to_big(RateUnits::default());
        match precision.or(declared.map(i64::from)) {
            Some(places) => decimal::to_plain(&value.with_scale_round(places, self.context.rounding)),
            None => decimal::to_plain(&value),
        }
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_in(RateUnits::default(), None, None))
    }
}
