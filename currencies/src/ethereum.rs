//! Ethereum and ERC-20 tokens.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use monetary_common::{denominations, Currency, Denomination, IntoDecimal, MonetaryAmount};

denominations! {
    /// Units of Ether.
    pub enum EthereumUnit {
        Eth = ("ETH", 18),
        GWei = ("GWei", 9),
        Wei = ("Wei", 0),
    }
}

denominations! {
    /// Units of Tether.
    pub enum TetherUnit {
        Tether = ("Tether", 6),
        Raw = ("Raw", 0),
    }
}

/// Mainnet contract of Tether USD.
pub const TETHER_ADDRESS: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";

static ETHEREUM: LazyLock<Arc<Currency>> = LazyLock::new(|| {
    crate::define(
        Currency::builder("Ethereum")
            .units(EthereumUnit::ALL.iter().copied())
            .base(EthereumUnit::Eth)
            .ticker("ETH"),
    )
});

static TETHER: LazyLock<Erc20Token> = LazyLock::new(|| {
    Erc20Token::new(
        crate::define(
            Currency::builder("Tether")
                .units(TetherUnit::ALL.iter().copied())
                .base(TetherUnit::Tether)
                .ticker("USDT"),
        ),
        TETHER_ADDRESS,
    )
});

/// Ether.
pub fn ethereum() -> Arc<Currency> {
    Arc::clone(&ETHEREUM)
}

/// An Ether amount.
pub fn ethereum_amount(amount: impl IntoDecimal, unit: EthereumUnit) -> MonetaryAmount {
    MonetaryAmount::from_unit(ethereum(), amount, unit)
}

/// A token living in an ERC-20 contract.
///
/// Dereferences to its currency descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Token {
    currency: Arc<Currency>,
    address: String,
}

impl Erc20Token {
    /// Create a token descriptor. The address is stored lowercased.
    pub fn new(currency: Arc<Currency>, address: impl Into<String>) -> Self {
        Self {
            currency,
            address: address.into().to_ascii_lowercase(),
        }
    }

    /// Get the currency descriptor.
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Get the contract address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// An amount of this token.
    pub fn amount(&self, amount: impl IntoDecimal, unit: impl Denomination) -> MonetaryAmount {
        MonetaryAmount::from_unit(Arc::clone(&self.currency), amount, unit)
    }
}

impl Deref for Erc20Token {
    type Target = Currency;

    fn deref(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for Erc20Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.currency, self.address)
    }
}

/// Tether USD on Ethereum mainnet.
pub fn tether() -> Erc20Token {
    TETHER.clone()
}
