//! Per-unit amount constructors derived from a currency's unit table.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::amount::MonetaryAmount;
use crate::config::ArithmeticContext;
use crate::currency::Currency;
use crate::decimal::{self, IntoDecimal};
use crate::error::Result;
use crate::unit::{Denomination, Unit, ATOMIC};

/// Constructor for amounts expressed in one unit of one currency.
#[derive(Debug, Clone)]
pub struct UnitFactory {
    currency: Arc<Currency>,
    unit: Unit,
    context: ArithmeticContext,
}

impl UnitFactory {
    /// The unit inputs are interpreted in.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Build an amount from a value in this unit.
    pub fn amount(&self, amount: impl IntoDecimal) -> MonetaryAmount {
        MonetaryAmount::from_unit(Arc::clone(&self.currency), amount, &self.unit)
            .with_context(self.context)
    }

    /// Parse a decimal string in this unit.
    pub fn parse(&self, amount: &str) -> Result<MonetaryAmount> {
        Ok(self.amount(decimal::parse(amount)?))
    }
}

/// Builds amounts of one currency.
///
/// Holds the currency and the context every produced amount starts with,
/// so call sites never look up exponents themselves:
///
/// ```
/// use std::sync::Arc;
/// use monetary_common::{AmountFactory, Currency};
///
/// let btc = Arc::new(
///     Currency::builder("Bitcoin").unit("BTC", 8).unit("Satoshi", 0).build().unwrap(),
/// );
/// let factory = AmountFactory::new(btc);
/// let amount = factory.from("BTC").unwrap().amount(3);
/// assert_eq!(amount.to_string(), "300000000");
/// ```
#[derive(Debug, Clone)]
pub struct AmountFactory {
    currency: Arc<Currency>,
    context: ArithmeticContext,
}

impl AmountFactory {
    /// Create a factory with the default arithmetic context.
    pub fn new(currency: Arc<Currency>) -> Self {
        Self {
            currency,
            context: ArithmeticContext::default(),
        }
    }

    /// Use a different context for produced amounts.
    pub fn with_context(mut self, context: ArithmeticContext) -> Self {
        self.context = context;
        self
    }

    /// Get the currency.
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Constructor for the unit named `unit`.
    pub fn from(&self, unit: &str) -> Result<UnitFactory> {
        let unit = self.currency.unit(unit)?;
        Ok(self.unit_factory(unit.clone()))
    }

    fn unit_factory(&self, unit: Unit) -> UnitFactory {
        UnitFactory {
            currency: Arc::clone(&self.currency),
            unit,
            context: self.context,
        }
    }

    /// Build an amount from a value in any unit.
    pub fn amount(&self, amount: impl IntoDecimal, unit: impl Denomination) -> MonetaryAmount {
        MonetaryAmount::from_unit(Arc::clone(&self.currency), amount, unit).with_context(self.context)
    }

    /// Build an amount from a value in the base unit.
    pub fn base(&self, amount: impl IntoDecimal) -> MonetaryAmount {
        self.amount(amount, self.currency.base())
    }

    /// Build an amount from a value in atomic units.
    pub fn atomic(&self, amount: impl IntoDecimal) -> MonetaryAmount {
        self.amount(amount, ATOMIC)
    }

    /// A zero amount.
    pub fn zero(&self) -> MonetaryAmount {
        self.atomic(0u8)
    }

    /// One constructor per declared unit, keyed by unit name.
    pub fn conversions(&self) -> BTreeMap<String, UnitFactory> {
        self.currency
            .units()
            .iter()
            .map(|unit| (unit.name().to_string(), self.unit_factory(unit.clone())))
            .collect()
    }
}

/// Derive one constructor per unit of `currency`, keyed by unit name.
pub fn generate_from_conversions(currency: &Arc<Currency>) -> BTreeMap<String, UnitFactory> {
    AmountFactory::new(Arc::clone(currency)).conversions()
}
