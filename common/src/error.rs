//! Error types for monetary amounts and currency descriptors.

use thiserror::Error;

/// Errors raised while building or loading a currency descriptor.
///
/// These describe defects in static configuration: a descriptor that fails
/// validation is never usable, so callers should treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Currency name is empty.
    #[error("Currency name cannot be empty")]
    EmptyName,

    /// Unit table has no entries.
    #[error("Unit table of {currency} is empty")]
    EmptyUnitTable { currency: String },

    /// Unit table has no exponent 0 entry.
    #[error("Unit table of {currency} has no atomic unit (exponent 0)")]
    MissingAtomicUnit { currency: String },

    /// The same unit name was declared twice.
    #[error("Duplicate unit {unit} in {currency}")]
    DuplicateUnit { currency: String, unit: String },

    /// Base exponent is not declared in the unit table.
    #[error("Base exponent {exponent} is not a unit of {currency}")]
    UnknownBaseUnit { currency: String, exponent: u32 },

    /// Raw base exponent is not declared in the unit table.
    #[error("Raw base exponent {exponent} is not a unit of {currency}")]
    UnknownRawUnit { currency: String, exponent: u32 },

    /// A unit referenced by name does not exist.
    #[error("Unknown unit {unit} for {currency}")]
    UnknownUnitName { currency: String, unit: String },

    /// Serialized definition could not be parsed.
    #[error("Invalid currency definition: {0}")]
    InvalidDefinition(String),
}

impl CurrencyError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            CurrencyError::EmptyName => "EMPTY_NAME",
            CurrencyError::EmptyUnitTable { .. } => "EMPTY_UNIT_TABLE",
            CurrencyError::MissingAtomicUnit { .. } => "MISSING_ATOMIC_UNIT",
            CurrencyError::DuplicateUnit { .. } => "DUPLICATE_UNIT",
            CurrencyError::UnknownBaseUnit { .. } => "UNKNOWN_BASE_UNIT",
            CurrencyError::UnknownRawUnit { .. } => "UNKNOWN_RAW_UNIT",
            CurrencyError::UnknownUnitName { .. } => "UNKNOWN_UNIT_NAME",
            CurrencyError::InvalidDefinition(_) => "INVALID_DEFINITION",
        }
    }
}

impl From<serde_json::Error> for CurrencyError {
    fn from(err: serde_json::Error) -> Self {
        CurrencyError::InvalidDefinition(err.to_string())
    }
}

/// Errors raised by operations on monetary amounts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonetaryError {
    /// Operands belong to different currencies.
    #[error("Currency mismatch in {operation}: expected {expected}, got {actual}")]
    CurrencyMismatch {
        operation: &'static str,
        expected: String,
        actual: String,
    },

    /// Division by a zero scalar or rate.
    #[error("Division by zero")]
    DivisionByZero,

    /// Unit name is not declared by the currency.
    #[error("Unknown unit {unit} for {currency}")]
    UnknownUnit { currency: String, unit: String },

    /// Name is not one of the variants of a typed unit enum.
    #[error("Unknown unit {unit} for {denomination}")]
    UnknownDenomination {
        denomination: &'static str,
        unit: String,
    },

    /// Input could not be read as a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Value does not fit the requested representation.
    #[error("Value not representable: {0}")]
    NotRepresentable(String),
}

impl MonetaryError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            MonetaryError::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            MonetaryError::DivisionByZero => "DIVISION_BY_ZERO",
            MonetaryError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            MonetaryError::UnknownDenomination { .. } => "UNKNOWN_DENOMINATION",
            MonetaryError::InvalidAmount(_) => "INVALID_AMOUNT",
            MonetaryError::NotRepresentable(_) => "NOT_REPRESENTABLE",
        }
    }

    pub(crate) fn mismatch(
        operation: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        MonetaryError::CurrencyMismatch {
            operation,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for monetary operations.
pub type Result<T> = std::result::Result<T, MonetaryError>;
