//! Currency descriptors.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CurrencyError, MonetaryError};
use crate::unit::{Denomination, Unit, UnitTable, ATOMIC};

/// Immutable description of a currency and its denominations.
///
/// Two descriptors with the same name are the same currency, whatever
/// their other fields say. Descriptors are built once and shared (usually
/// behind an `Arc`) by every amount of that currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CurrencyDefinition", into = "CurrencyDefinition")]
pub struct Currency {
    name: String,
    units: UnitTable,
    base: Unit,
    raw_base: Unit,
    human_decimals: Option<u32>,
    ticker: Option<String>,
}

impl Currency {
    /// Start building a currency.
    pub fn builder(name: impl Into<String>) -> CurrencyBuilder {
        CurrencyBuilder::new(name)
    }

    /// Load a currency from its JSON definition.
    ///
    /// ```
    /// let dot = monetary_common::Currency::from_json(
    ///     r#"{"name":"Polkadot","units":{"DOT":10,"Planck":0},"base":10,"human_decimals":5}"#,
    /// ).unwrap();
    /// assert_eq!(dot.base(), 10);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CurrencyError> {
        let definition: CurrencyDefinition = serde_json::from_str(json)?;
        Self::try_from(definition)
    }

    /// Get the currency name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the unit table.
    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Exponent of the human-facing base unit.
    pub fn base(&self) -> u32 {
        self.base.exponent()
    }

    /// The human-facing base unit.
    pub fn base_unit(&self) -> &Unit {
        &self.base
    }

    /// Exponent of the raw unit.
    pub fn raw_base(&self) -> u32 {
        self.raw_base.exponent()
    }

    /// The raw unit.
    pub fn raw_unit(&self) -> &Unit {
        &self.raw_base
    }

    /// Decimal places used for display, if declared.
    pub fn human_decimals(&self) -> Option<u32> {
        self.human_decimals
    }

    /// Get the ticker symbol, if declared.
    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref()
    }

    /// Look up a unit by name.
    pub fn unit(&self, name: &str) -> Result<&Unit, MonetaryError> {
        self.units.unit(name).ok_or_else(|| MonetaryError::UnknownUnit {
            currency: self.name.clone(),
            unit: name.to_string(),
        })
    }

    /// Check if both descriptors denote the same currency.
    pub fn is_same(&self, other: &Currency) -> bool {
        self.name == other.name
    }

    /// Copy of this descriptor under another name and ticker.
    ///
    /// Used for wrapped or derived assets that share a unit table.
    pub fn variant(&self, name: impl Into<String>, ticker: impl Into<String>) -> Currency {
        Currency {
            name: name.into(),
            ticker: Some(ticker.into()),
            ..self.clone()
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Reference to a unit either by exponent or by name.
#[derive(Debug, Clone)]
enum UnitRef {
    Exponent(u32),
    Name(String),
}

/// Builder for [`Currency`].
#[derive(Debug, Clone)]
pub struct CurrencyBuilder {
    name: String,
    units: Vec<Unit>,
    base: Option<UnitRef>,
    raw_base: Option<UnitRef>,
    human_decimals: Option<u32>,
    ticker: Option<String>,
}

impl CurrencyBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
            base: None,
            raw_base: None,
            human_decimals: None,
            ticker: None,
        }
    }

    /// Add a unit.
    pub fn unit(mut self, name: impl Into<String>, exponent: u32) -> Self {
        self.units.push(Unit::new(name, exponent));
        self
    }

    /// Add several units.
    pub fn units<I, U>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Unit>,
    {
        self.units.extend(units.into_iter().map(Into::into));
        self
    }

    /// Set the base unit. Defaults to the unit with the largest exponent.
    pub fn base(mut self, unit: impl Denomination) -> Self {
        self.base = Some(UnitRef::Exponent(unit.exponent()));
        self
    }

    /// Set the base unit by name.
    pub fn base_unit(mut self, name: impl Into<String>) -> Self {
        self.base = Some(UnitRef::Name(name.into()));
        self
    }

    /// Set the raw unit. Defaults to the atomic unit.
    pub fn raw_base(mut self, unit: impl Denomination) -> Self {
        self.raw_base = Some(UnitRef::Exponent(unit.exponent()));
        self
    }

    /// Set the raw unit by name.
    pub fn raw_base_unit(mut self, name: impl Into<String>) -> Self {
        self.raw_base = Some(UnitRef::Name(name.into()));
        self
    }

    /// Set the display precision.
    pub fn human_decimals(mut self, decimals: u32) -> Self {
        self.human_decimals = Some(decimals);
        self
    }

    /// Set the ticker symbol.
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Validate and build the currency.
    pub fn build(self) -> Result<Currency, CurrencyError> {
        if self.name.trim().is_empty() {
            return Err(CurrencyError::EmptyName);
        }

        let units = UnitTable::new(&self.name, self.units)?;

        let base = match self.base {
            Some(reference) => resolve(&self.name, &units, reference, |currency, exponent| {
                CurrencyError::UnknownBaseUnit { currency, exponent }
            })?,
            None => units
                .iter()
                .next()
                .cloned()
                .ok_or_else(|| CurrencyError::EmptyUnitTable {
                    currency: self.name.clone(),
                })?,
        };

        let raw_base = resolve(
            &self.name,
            &units,
            self.raw_base.unwrap_or(UnitRef::Exponent(ATOMIC)),
            |currency, exponent| CurrencyError::UnknownRawUnit { currency, exponent },
        )?;

        debug!(
            currency = %self.name,
            base = base.exponent(),
            raw_base = raw_base.exponent(),
            units = units.len(),
            "Built currency"
        );

        Ok(Currency {
            name: self.name,
            units,
            base,
            raw_base,
            human_decimals: self.human_decimals,
            ticker: self.ticker,
        })
    }
}

fn resolve(
    currency: &str,
    units: &UnitTable,
    reference: UnitRef,
    missing: impl FnOnce(String, u32) -> CurrencyError,
) -> Result<Unit, CurrencyError> {
    match reference {
        UnitRef::Exponent(exponent) => units
            .unit_for(exponent)
            .cloned()
            .ok_or_else(|| missing(currency.to_string(), exponent)),
        UnitRef::Name(name) => {
            units
                .unit(&name)
                .cloned()
                .ok_or_else(|| CurrencyError::UnknownUnitName {
                    currency: currency.to_string(),
                    unit: name,
                })
        }
    }
}

/// Plain serialized form of a currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CurrencyDefinition {
    name: String,
    units: BTreeMap<String, u32>,
    base: u32,
    #[serde(default)]
    raw_base: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    human_decimals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ticker: Option<String>,
}

impl TryFrom<CurrencyDefinition> for Currency {
    type Error = CurrencyError;

    fn try_from(definition: CurrencyDefinition) -> Result<Self, Self::Error> {
        let mut builder = Currency::builder(definition.name)
            .units(
                definition
                    .units
                    .into_iter()
                    .map(|(name, exponent)| Unit::new(name, exponent)),
            )
            .base(definition.base)
            .raw_base(definition.raw_base);

        if let Some(decimals) = definition.human_decimals {
            builder = builder.human_decimals(decimals);
        }
        if let Some(ticker) = definition.ticker {
            builder = builder.ticker(ticker);
        }

        builder.build()
    }
}

impl From<Currency> for CurrencyDefinition {
    fn from(currency: Currency) -> Self {
        Self {
            units: currency
                .units
                .iter()
                .map(|unit| (unit.name().to_string(), unit.exponent()))
                .collect(),
            base: currency.base.exponent(),
            raw_base: currency.raw_base.exponent(),
            name: currency.name,
            human_decimals: currency.human_decimals,
            ticker: currency.ticker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitcoin() -> Currency {
        Currency::builder("Bitcoin")
            .unit("BTC", 8)
            .unit("Satoshi", 0)
            .base(8u32)
            .human_decimals(8)
            .ticker("BTC")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_currency() {
        let btc = bitcoin();

        assert_eq!(btc.name(), "Bitcoin");
        assert_eq!(btc.base(), 8);
        assert_eq!(btc.base_unit().name(), "BTC");
        assert_eq!(btc.raw_base(), 0);
        assert_eq!(btc.raw_unit().name(), "Satoshi");
        assert_eq!(btc.human_decimals(), Some(8));
        assert_eq!(btc.ticker(), Some("BTC"));
        assert_eq!(btc.to_string(), "Bitcoin");
    }

    #[test]
    fn test_default_base_is_largest_unit() {
        let eth = Currency::builder("Ethereum")
            .unit("Wei", 0)
            .unit("GWei", 9)
            .unit("ETH", 18)
            .build()
            .unwrap();

        assert_eq!(eth.base(), 18);
        assert_eq!(eth.base_unit().name(), "ETH");
        assert_eq!(eth.human_decimals(), None);
        assert_eq!(eth.ticker(), None);
    }

    #[test]
    fn test_base_by_name() {
        let usdc = Currency::builder("USD Coin")
            .unit("USDC", 6)
            .unit("Raw", 0)
            .base_unit("USDC")
            .raw_base_unit("Raw")
            .build()
            .unwrap();

        assert_eq!(usdc.base(), 6);
        assert_eq!(usdc.raw_unit().name(), "Raw");
    }

    #[test]
    fn test_invalid_base() {
        let result = Currency::builder("Broken")
            .unit("Coin", 8)
            .unit("Atom", 0)
            .base(6u32)
            .build();

        assert_eq!(
            result.unwrap_err(),
            CurrencyError::UnknownBaseUnit {
                currency: "Broken".to_string(),
                exponent: 6
            }
        );
    }

    #[test]
    fn test_invalid_raw_base() {
        let result = Currency::builder("Broken")
            .unit("Coin", 8)
            .unit("Atom", 0)
            .raw_base(3u32)
            .build();

        assert!(matches!(result, Err(CurrencyError::UnknownRawUnit { exponent: 3, .. })));

        let result = Currency::builder("Broken")
            .unit("Coin", 8)
            .unit("Atom", 0)
            .base_unit("Nope")
            .build();

        assert!(matches!(result, Err(CurrencyError::UnknownUnitName { .. })));
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(
            Currency::builder("  ").unit("Atom", 0).build().unwrap_err(),
            CurrencyError::EmptyName
        );
        assert!(matches!(
            Currency::builder("Nothing").build(),
            Err(CurrencyError::EmptyUnitTable { .. })
        ));
        assert!(matches!(
            Currency::builder("NoAtom").unit("Coin", 2).build(),
            Err(CurrencyError::MissingAtomicUnit { .. })
        ));
    }

    #[test]
    fn test_equality_by_name() {
        let btc = bitcoin();
        let wrapped = btc.variant("interBTC", "IBTC");
        let same_name = Currency::builder("Bitcoin").unit("sat", 0).build().unwrap();

        assert_eq!(btc, same_name);
        assert_ne!(btc, wrapped);
        assert_eq!(wrapped.base(), 8);
        assert_eq!(wrapped.ticker(), Some("IBTC"));
    }

    #[test]
    fn test_unit_lookup() {
        let btc = bitcoin();

        assert_eq!(btc.unit("Satoshi").unwrap().exponent(), 0);
        assert_eq!(
            btc.unit("mBTC").unwrap_err(),
            MonetaryError::UnknownUnit {
                currency: "Bitcoin".to_string(),
                unit: "mBTC".to_string()
            }
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let btc = bitcoin();
        let json = serde_json::to_string(&btc).unwrap();
        let parsed = Currency::from_json(&json).unwrap();

        assert_eq!(parsed, btc);
        assert_eq!(parsed.base(), 8);
        assert_eq!(parsed.units(), btc.units());
        assert_eq!(parsed.ticker(), Some("BTC"));
    }

    #[test]
    fn test_json_validation() {
        let result = Currency::from_json(r#"{"name":"Dai","units":{"Dai":18,"Raw":0},"base":6}"#);
        assert!(matches!(result, Err(CurrencyError::UnknownBaseUnit { exponent: 6, .. })));

        let result = Currency::from_json("{");
        assert!(matches!(result, Err(CurrencyError::InvalidDefinition(_))));

        let parsed: Result<Currency, _> =
            serde_json::from_str(r#"{"name":"Dai","units":{"Dai":18},"base":18}"#);
        assert!(parsed.is_err());
    }
}
