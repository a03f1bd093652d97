//! Bitcoin and wrapped Bitcoin.

use std::sync::{Arc, LazyLock};

use monetary_common::{denominations, Currency, IntoDecimal, MonetaryAmount};

denominations! {
    /// Units of Bitcoin and its wrapped variants.
    pub enum BitcoinUnit {
        Btc = ("BTC", 8),
        Satoshi = ("Satoshi", 0),
    }
}

static BITCOIN: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("Bitcoin")
            .units(BitcoinUnit::ALL.iter().copied())
            .base(BitcoinUnit::Btc)
            .raw_base(BitcoinUnit::Satoshi)
            .human_decimals(8)
            .ticker("BTC"),
    )
});

static INTER_BTC: LazyLock<Arc<Currency>> =
    LazyLock::new(|| Arc::new(BITCOIN.variant("interBTC", "IBTC")));

static KBTC: LazyLock<Arc<Currency>> = LazyLock::new(|| Arc::new(BITCOIN.variant("kBTC", "KBTC")));

/// Bitcoin.
pub fn bitcoin() -> Arc<Currency> {
    Arc::clone(&BITCOIN)
}

/// interBTC, Bitcoin wrapped on Interlay.
pub fn interbtc() -> Arc<Currency> {
    Arc::clone(&INTER_BTC)
}

/// kBTC, Bitcoin wrapped on Kintsugi.
pub fn kbtc() -> Arc<Currency> {
    Arc::clone(&KBTC)
}

/// A Bitcoin amount.
pub fn bitcoin_amount(amount: impl IntoDecimal, unit: BitcoinUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(bitcoin(), amount, unit)
}

/// An interBTC amount.
pub fn interbtc_amount(amount: impl IntoDecimal, unit: BitcoinUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(interbtc(), amount, unit)
}

/// A kBTC amount.
pub fn kbtc_amount(amount: impl IntoDecimal, unit: BitcoinUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(kbtc(), amount, unit)
}
