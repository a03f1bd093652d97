//! Conversion records.

use bigdecimal::{BigDecimal, Zero};
use monetary_common::decimal;
use monetary_common::MonetaryAmount;

/// Represents a completed currency conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Input amount.
    pub input: MonetaryAmount,
    /// Output amount.
    pub output: MonetaryAmount,
}

impl Conversion {
    /// Create a new conversion record.
    pub fn new(input: MonetaryAmount, output: MonetaryAmount) -> Self {
        Self { input, output }
    }

    /// Output per one unit of input, both in their base units.
    ///
    /// Zero when the input is zero.
    pub fn effective_rate(&self) -> BigDecimal {
        if self.input.is_zero() {
            return BigDecimal::zero();
        }
        let input = self.input.to_big(self.input.currency().base());
        let output = self.output.to_big(self.output.currency().base());
        let context = self.input.context();
        decimal::trim((output / input).with_precision_round(context.precision(), context.rounding))
    }

    /// Names of the input and output currencies.
    pub fn pair(&self) -> (&str, &str) {
        (self.input.currency().name(), self.output.currency().name())
    }
}
