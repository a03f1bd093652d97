//! Monetary Currencies
//!
//! Static descriptors and typed unit enums for the assets supported out of
//! the box, plus a registry to look them up by name or ticker.
//!
//! Descriptors are built lazily on first use and shared behind an `Arc`:
//!
//! ```
//! use monetary_currencies::{bitcoin, bitcoin_amount, BitcoinUnit};
//!
//! let amount = bitcoin_amount(3, BitcoinUnit::Btc);
//! assert_eq!(amount.to_string(), "300000000");
//! assert_eq!(bitcoin().ticker(), Some("BTC"));
//! ```

use std::sync::Arc;

use monetary_common::{Currency, CurrencyBuilder};

pub mod bitcoin;
pub mod ethereum;
pub mod interlay;
pub mod polkadot;
pub mod registry;
pub mod stablecoins;

pub use bitcoin::*;
pub use ethereum::*;
pub use interlay::*;
pub use polkadot::*;
pub use registry::{all, by_name, by_ticker};
pub use stablecoins::*;

/// Build a static descriptor. A descriptor that fails validation is a
/// programming error, so this panics instead of returning it.
fn define(builder: CurrencyBuilder) -> Arc<Currency> {
    match builder.build() {
        Ok(currency) => Arc::new(currency),
        Err(err) => panic!("invalid static currency descriptor: {err}"),
    }
}
