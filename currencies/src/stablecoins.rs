//! Fiat-backed stablecoins.

use std::sync::{Arc, LazyLock};

use monetary_common::{denominations, Currency, IntoDecimal, MonetaryAmount};

denominations! {
    /// Units of USD Coin.
    pub enum UsdcUnit {
        Usdc = ("USDC", 6),
        Raw = ("Raw", 0),
    }
}

static USDC: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("USD Coin")
            .units(UsdcUnit::ALL.iter().copied())
            .base(UsdcUnit::Usdc)
            .raw_base(UsdcUnit::Raw)
            .human_decimals(6)
            .ticker("USDC"),
    )
});

/// USD Coin.
pub fn usdc() -> Arc<Currency> {
    Arc::clone(&USDC)
}

/// A USD Coin amount.
pub fn usdc_amount(amount: impl IntoDecimal, unit: UsdcUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(usdc(), amount, unit)
}
