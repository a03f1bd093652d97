//! Denominations and unit tables.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::CurrencyError;

/// Exponent of the atomic (smallest) unit of every currency.
pub const ATOMIC: u32 = 0;

/// Anything that identifies a denomination by its exponent.
///
/// The exponent is the number of decimal places a unit sits above the
/// atomic unit: `BTC` is 8 for Bitcoin, `Satoshi` is 0.
pub trait Denomination {
    /// Decimal places above the atomic unit.
    fn exponent(&self) -> u32;
}

impl Denomination for u32 {
    fn exponent(&self) -> u32 {
        *self
    }
}

impl<T: Denomination + ?Sized> Denomination for &T {
    fn exponent(&self) -> u32 {
        (**self).exponent()
    }
}

/// A named denomination of a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit {
    name: String,
    exponent: u32,
}

impl Unit {
    /// Create a new unit.
    pub fn new(name: impl Into<String>, exponent: u32) -> Self {
        Self {
            name: name.into(),
            exponent,
        }
    }

    /// Get the unit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is the atomic unit.
    pub fn is_atomic(&self) -> bool {
        self.exponent == ATOMIC
    }
}

impl Denomination for Unit {
    fn exponent(&self) -> u32 {
        self.exponent
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validated mapping from unit name to exponent.
///
/// Names are unique and at least one unit has exponent 0. Units are kept
/// ordered from the largest exponent down so iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: Vec<Unit>,
}

impl UnitTable {
    /// Build a table, checking names are unique and an atomic unit exists.
    ///
    /// `currency` is only used to label errors.
    pub fn new<I, U>(currency: &str, units: I) -> Result<Self, CurrencyError>
    where
        I: IntoIterator<Item = U>,
        U: Into<Unit>,
    {
        let mut units: Vec<Unit> = units.into_iter().map(Into::into).collect();
        if units.is_empty() {
            return Err(CurrencyError::EmptyUnitTable {
                currency: currency.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.name.as_str()) {
                return Err(CurrencyError::DuplicateUnit {
                    currency: currency.to_string(),
                    unit: unit.name.clone(),
                });
            }
        }

        if !units.iter().any(Unit::is_atomic) {
            return Err(CurrencyError::MissingAtomicUnit {
                currency: currency.to_string(),
            });
        }

        units.sort_by(|a, b| b.exponent.cmp(&a.exponent).then_with(|| a.name.cmp(&b.name)));
        Ok(Self { units })
    }

    /// Look up the exponent of a unit by name.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.unit(name).map(|unit| unit.exponent)
    }

    /// Look up a unit by name.
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.name == name)
    }

    /// First unit declared with the given exponent.
    pub fn unit_for(&self, exponent: u32) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.exponent == exponent)
    }

    /// Check if any unit has the given exponent.
    pub fn contains_exponent(&self, exponent: u32) -> bool {
        self.unit_for(exponent).is_some()
    }

    /// The atomic unit.
    pub fn atomic(&self) -> Option<&Unit> {
        self.unit_for(ATOMIC)
    }

    /// Iterate over all units, largest exponent first.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// All unit names, largest exponent first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(Unit::name)
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a Unit;
    type IntoIter = std::slice::Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl Serialize for UnitTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.units.len()))?;
        for unit in &self.units {
            map.serialize_entry(&unit.name, &unit.exponent)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UnitTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, u32>::deserialize(deserializer)?;
        UnitTable::new(
            "unit table",
            entries
                .into_iter()
                .map(|(name, exponent)| Unit::new(name, exponent)),
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Declare a typed set of denominations for one currency.
///
/// Generates a `Copy` enum implementing [`Denomination`], with `name()`,
/// an `ALL` slice in declaration order, `Display`, `FromStr` and a
/// conversion into [`Unit`].
///
/// ```
/// monetary_common::denominations! {
///     /// Units of Bitcoin.
///     pub enum BitcoinUnit {
///         Btc = ("BTC", 8),
///         Satoshi = ("Satoshi", 0),
///     }
/// }
///
/// use monetary_common::Denomination;
/// assert_eq!(BitcoinUnit::Btc.exponent(), 8);
/// assert_eq!("Satoshi".parse::<BitcoinUnit>().unwrap(), BitcoinUnit::Satoshi);
/// ```
#[macro_export]
macro_rules! denominations {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = ($label:literal, $exponent:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every unit, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Unit name as declared in the currency's unit table.
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl $crate::Denomination for $name {
            fn exponent(&self) -> u32 {
                match self {
                    $($name::$variant => $exponent,)+
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::Unit {
            fn from(unit: $name) -> Self {
                $crate::Unit::new(unit.name(), <$name as $crate::Denomination>::exponent(&unit))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::MonetaryError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|unit| unit.name() == s)
                    .ok_or_else(|| $crate::MonetaryError::UnknownDenomination {
                        denomination: stringify!($name),
                        unit: s.to_string(),
                    })
            }
        }
    };
}
