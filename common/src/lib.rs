//! Monetary Common Types
//!
//! Exact, multi-denomination monetary amounts: unit tables, currency
//! descriptors, the arbitrary-precision [`MonetaryAmount`] value type and
//! per-unit amount factories.

pub mod amount;
pub mod config;
pub mod currency;
pub mod decimal;
pub mod error;
pub mod factory;
pub mod unit;

pub use amount::MonetaryAmount;
pub use config::ArithmeticContext;
pub use currency::{Currency, CurrencyBuilder};
pub use decimal::IntoDecimal;
pub use error::*;
pub use factory::{generate_from_conversions, AmountFactory, UnitFactory};
pub use unit::{Denomination, Unit, UnitTable, ATOMIC};

pub use bigdecimal::{BigDecimal, RoundingMode};
