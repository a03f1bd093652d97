//! Interlay and Kintsugi parachain assets.

use std::sync::{Arc, LazyLock};

use monetary_common::{denominations, Currency, IntoDecimal, MonetaryAmount};

denominations! {
    /// Units of INTR and vote-escrowed INTR.
    pub enum InterlayUnit {
        Intr = ("INTR", 10),
        Planck = ("Planck", 0),
    }
}

denominations! {
    /// Units of KINT and vote-escrowed KINT.
    pub enum KintsugiUnit {
        Kint = ("KINT", 12),
        Planck = ("Planck", 0),
    }
}

static INTERLAY: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("Interlay")
            .units(InterlayUnit::ALL.iter().copied())
            .base(InterlayUnit::Intr)
            .raw_base(InterlayUnit::Planck)
            .human_decimals(3)
            .ticker("INTR"),
    )
});

static KINTSUGI: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("Kintsugi")
            .units(KintsugiUnit::ALL.iter().copied())
            .base(KintsugiUnit::Kint)
            .raw_base(KintsugiUnit::Planck)
            .human_decimals(3)
            .ticker("KINT"),
    )
});

static VOTE_INTERLAY: LazyLock<Arc<Currency>> =
    LazyLock::new(|| Arc::new(INTERLAY.variant("Vote Interlay", "VINTR")));

static VOTE_KINTSUGI: LazyLock<Arc<Currency>> =
    LazyLock::new(|| Arc::new(KINTSUGI.variant("Vote Kintsugi", "VKINT")));

/// Interlay.
pub fn interlay() -> Arc<Currency> {
    Arc::clone(&INTERLAY)
}

/// Kintsugi.
pub fn kintsugi() -> Arc<Currency> {
    Arc::clone(&KINTSUGI)
}

/// Vote-escrowed INTR.
pub fn vote_interlay() -> Arc<Currency> {
    Arc::clone(&VOTE_INTERLAY)
}

/// Vote-escrowed KINT.
pub fn vote_kintsugi() -> Arc<Currency> {
    Arc::clone(&VOTE_KINTSUGI)
}

/// An INTR amount.
pub fn interlay_amount(amount: impl IntoDecimal, unit: InterlayUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(interlay(), amount, unit)
}

/// A KINT amount.
pub fn kintsugi_amount(amount: impl IntoDecimal, unit: KintsugiUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(kintsugi(), amount, unit)
}

/// A vote-escrowed INTR amount.
pub fn vote_interlay_amount(amount: impl IntoDecimal, unit: InterlayUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(vote_interlay(), amount, unit)
}

/// A vote-escrowed KINT amount.
pub fn vote_kintsugi_amount(amount: impl IntoDecimal, unit: KintsugiUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(vote_kintsugi(), amount, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_descriptors() {
        assert_eq!(interlay().base(), 10);
        assert_eq!(kintsugi().base(), 12);
        assert_eq!(interlay().human_decimals(), Some(3));
        assert_eq!(vote_interlay().ticker(), Some("VINTR"));
        assert_eq!(vote_kintsugi().ticker(), Some("VKINT"));
        assert_eq!(vote_kintsugi().units(), kintsugi().units());
    }

    #[test]
    fn test_human_display() {
        let intr = interlay_amount(dec!(1.23456), InterlayUnit::Intr);
        assert_eq!(intr.to_human(), "1.235");

        let dust = kintsugi_amount(5, KintsugiUnit::Planck);
        assert_eq!(dust.to_human(), "0.000000000005");
    }

    #[test]
    fn test_vote_tokens_do_not_mix_with_native() {
        let native = kintsugi_amount(1, KintsugiUnit::Kint);
        let vote = vote_kintsugi_amount(1, KintsugiUnit::Kint);

        assert!(native.sub(&vote).is_err());
        assert_eq!(
            vote.add(&vote_kintsugi_amount(1, KintsugiUnit::Kint)).unwrap().str("KINT").unwrap(),
            "2"
        );
        assert!(vote_interlay_amount(0, InterlayUnit::Intr).is_zero());
    }
}
