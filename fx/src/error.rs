//! FX error types.

use monetary_common::MonetaryError;
use thiserror::Error;

/// Errors that can occur when converting between currencies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    /// Amount is not in the currency the rate expects.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// Rate builder was finished without a rate.
    #[error("Exchange rate is missing")]
    MissingRate,

    /// Rate builder was finished without a base or counter currency.
    #[error("Exchange rate is missing its {0} currency")]
    MissingCurrency(&'static str),

    /// Underlying amount arithmetic failed.
    #[error(transparent)]
    Monetary(#[from] MonetaryError),
}

impl FxError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            FxError::MissingRate => "MISSING_RATE",
            FxError::MissingCurrency(_) => "MISSING_CURRENCY",
            FxError::Monetary(err) => err.error_code(),
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
