//! Lookup of the built-in currencies.

use std::sync::Arc;

use monetary_common::Currency;
use tracing::trace;

use crate::{
    bitcoin, ethereum, interbtc, interlay, kbtc, kintsugi, kusama, polkadot, tether, usdc,
    vote_interlay, vote_kintsugi,
};

/// Every built-in currency.
pub fn all() -> Vec<Arc<Currency>> {
    vec![
        bitcoin(),
        interbtc(),
        kbtc(),
        ethereum(),
        tether().currency().clone(),
        polkadot(),
        kusama(),
        interlay(),
        kintsugi(),
        vote_interlay(),
        vote_kintsugi(),
        usdc(),
    ]
}

/// Find a built-in currency by ticker, ignoring ASCII case.
pub fn by_ticker(ticker: &str) -> Option<Arc<Currency>> {
    let found = all().into_iter().find(|currency| {
        currency
            .ticker()
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(ticker))
    });
    if found.is_none() {
        trace!(ticker, "No built-in currency for ticker");
    }
    found
}

/// Find a built-in currency by its exact name.
pub fn by_name(name: &str) -> Option<Arc<Currency>> {
    let found = all().into_iter().find(|currency| currency.name() == name);
    if found.is_none() {
        trace!(name, "No built-in currency with name");
    }
    found
}
