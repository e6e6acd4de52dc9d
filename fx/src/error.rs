//! Rate table error types.

use rust_decimal::Decimal;
use tally_money::MoneyError;
use thiserror::Error;

use crate::quote::CurrencyPair;

/// Errors that can occur while loading or querying a rate table.
#[derive(Debug, Error)]
pub enum FxError {
    /// No quote is held for the requested currency pair.
    #[error("Rate not available for {0}")]
    RateNotAvailable(CurrencyPair),

    /// The quote held for the pair is past its validity window.
    #[error("Rate expired for {0}")]
    RateExpired(CurrencyPair),

    /// Rates must be strictly positive.
    #[error("Invalid rate {rate} for {pair}")]
    InvalidRate { pair: CurrencyPair, rate: Decimal },

    /// Configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A currency in the configuration could not be resolved.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A rate file could not be read.
    #[error("Failed to read rate file: {0}")]
    Io(#[from] std::io::Error),

    /// A rate file could not be parsed.
    #[error("Failed to parse rate file: {0}")]
    Json(#[from] serde_json::Error),
}

impl FxError {
    /// Get error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::RateNotAvailable(_) => "RATE_NOT_AVAILABLE",
            FxError::RateExpired(_) => "RATE_EXPIRED",
            FxError::InvalidRate { .. } => "INVALID_RATE",
            FxError::Config(_) => "INVALID_CONFIG",
            FxError::Money(err) => err.error_code(),
            FxError::Io(_) => "IO_ERROR",
            FxError::Json(_) => "PARSE_ERROR",
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
