//! Polkadot relay chain assets.

use std::sync::{Arc, LazyLock};

use monetary_common::{denominations, Currency, IntoDecimal, MonetaryAmount};

denominations! {
    /// Units of DOT.
    pub enum PolkadotUnit {
        Dot = ("DOT", 10),
        Planck = ("Planck", 0),
    }
}

denominations! {
    /// Units of KSM.
    pub enum KusamaUnit {
        Ksm = ("KSM", 12),
        Planck = ("Planck", 0),
    }
}

static POLKADOT: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("Polkadot")
            .units(PolkadotUnit::ALL.iter().copied())
            .base(PolkadotUnit::Dot)
            .raw_base(PolkadotUnit::Planck)
            .human_decimals(5)
            .ticker("DOT"),
    )
});

static KUSAMA: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("Kusama")
            .units(KusamaUnit::ALL.iter().copied())
            .base(KusamaUnit::Ksm)
            .raw_base(KusamaUnit::Planck)
            .human_decimals(5)
            .ticker("KSM"),
    )
});

/// Polkadot.
pub fn polkadot() -> Arc<Currency> {
    Arc::clone(&POLKADOT)
}

/// Kusama.
pub fn kusama() -> Arc<Currency> {
    Arc::clone(&KUSAMA)
}

/// A DOT amount.
pub fn polkadot_amount(amount: impl IntoDecimal, unit: PolkadotUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(polkadot(), amount, unit)
}

/// A KSM amount.
pub fn kusama_amount(amount: impl IntoDecimal, unit: KusamaUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(kusama(), amount, unit)
}
