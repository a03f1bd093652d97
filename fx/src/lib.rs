//! Monetary FX
//!
//! Exchange rates between amounts of two currencies.
//!
//! # Features
//!
//! - Rates quoted in any pair of units, normalized to atomic units
//! - Conversion in both directions without intermediate rounding
//! - Rate views in any unit pairing, with optional rounding for display
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use monetary_common::{Currency, MonetaryAmount};
//! use monetary_fx::ExchangeRate;
//!
//! let eth = Arc::new(
//!     Currency::builder("Ethereum").unit("ETH", 18).unit("Wei", 0).build().unwrap(),
//! );
//! let btc = Arc::new(
//!     Currency::builder("Bitcoin").unit("BTC", 8).unit("Satoshi", 0).build().unwrap(),
//! );
//!
//! let rate = ExchangeRate::parse(eth.clone(), btc, "0.05").unwrap();
//! let one_eth = MonetaryAmount::from_unit(eth, 1, 18u32);
//! let btc_amount = rate.to_counter(&one_eth).unwrap();
//! assert_eq!(btc_amount.to_string_in(8u32), "0.05");
//! ```

pub mod builder;
pub mod conversion;
pub mod error;
pub mod rate;

pub use builder::ExchangeRateBuilder;
pub use conversion::Conversion;
pub use error::{FxError, FxResult};
pub use rate::{ExchangeRate, RateUnits};
