//! Error types for the money core.

use thiserror::Error;

/// Errors raised while constructing currencies or monetary values.
///
/// Exchange rate failures are not represented here: they belong to the
/// [`Exchange`](crate::Exchange) implementation and are returned unchanged.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// No currency is registered under the given code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// A currency code does not have the required shape.
    #[error("Invalid {kind} currency code: {code:?}")]
    InvalidCurrencyCode { kind: &'static str, code: String },

    /// An amount could not be parsed as a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] rust_decimal::Error),
}

impl MoneyError {
    /// Get error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            MoneyError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            MoneyError::InvalidCurrencyCode { .. } => "INVALID_CURRENCY_CODE",
            MoneyError::InvalidAmount(_) => "INVALID_AMOUNT",
        }
    }
}

/// Result type for money operations.
pub type MoneyResult<T> = Result<T, MoneyError>;
