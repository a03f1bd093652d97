//! Builder for exchange rates quoted in arbitrary units.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use monetary_common::decimal::{self, IntoDecimal};
use monetary_common::{ArithmeticContext, Currency, Denomination};

use crate::error::{FxError, FxResult};
use crate::rate::ExchangeRate;

#[derive(Debug, Clone)]
enum UnitRef {
    Exponent(u32),
    Name(String),
}

impl UnitRef {
    fn resolve(self, currency: &Currency) -> FxResult<u32> {
        match self {
            UnitRef::Exponent(exponent) => Ok(exponent),
            UnitRef::Name(name) => Ok(currency.unit(&name)?.exponent()),
        }
    }
}

/// Builder for [`ExchangeRate`].
///
/// Units default to the base unit of each currency.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateBuilder {
    base: Option<Arc<Currency>>,
    counter: Option<Arc<Currency>>,
    rate: Option<FxResult<BigDecimal>>,
    base_unit: Option<UnitRef>,
    counter_unit: Option<UnitRef>,
    context: ArithmeticContext,
}

impl ExchangeRateBuilder {
    /// Create a new exchange rate builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base currency.
    pub fn base(mut self, currency: Arc<Currency>) -> Self {
        self.base = Some(currency);
        self
    }

    /// Set the counter currency.
    pub fn counter(mut self, currency: Arc<Currency>) -> Self {
        self.counter = Some(currency);
        self
    }

    /// Set the rate: counter units per one base unit.
    pub fn rate(mut self, rate: impl IntoDecimal) -> Self {
        self.rate = Some(Ok(rate.into_decimal()));
        self
    }

    /// Set the rate from a decimal string. Parse errors surface in `build`.
    pub fn rate_str(mut self, rate: &str) -> Self {
        self.rate = Some(decimal::parse(rate).map_err(FxError::from));
        self
    }

    /// Quote the base side in `unit`.
    pub fn base_unit(mut self, unit: impl Denomination) -> Self {
        self.base_unit = Some(UnitRef::Exponent(unit.exponent()));
        self
    }

    /// Quote the base side in the unit named `name`.
    pub fn base_unit_name(mut self, name: impl Into<String>) -> Self {
        self.base_unit = Some(UnitRef::Name(name.into()));
        self
    }

    /// Quote the counter side in `unit`.
    pub fn counter_unit(mut self, unit: impl Denomination) -> Self {
        self.counter_unit = Some(UnitRef::Exponent(unit.exponent()));
        self
    }

    /// Quote the counter side in the unit named `name`.
    pub fn counter_unit_name(mut self, name: impl Into<String>) -> Self {
        self.counter_unit = Some(UnitRef::Name(name.into()));
        self
    }

    /// Use a different arithmetic context.
    pub fn context(mut self, context: ArithmeticContext) -> Self {
        self.context = context;
        self
    }

    /// Build the exchange rate.
    pub fn build(self) -> FxResult<ExchangeRate> {
        let base = self.base.ok_or(FxError::MissingCurrency("base"))?;
        let counter = self.counter.ok_or(FxError::MissingCurrency("counter"))?;
        let rate = self.rate.ok_or(FxError::MissingRate)??;

        let base_unit = match self.base_unit {
            Some(unit) => unit.resolve(&base)?,
            None => base.base(),
        };
        let counter_unit = match self.counter_unit {
            Some(unit) => unit.resolve(&counter)?,
            None => counter.base(),
        };

        Ok(ExchangeRate::from_units(base, counter, rate, base_unit, counter_unit)
            .with_context(self.context))
    }
}
