//! Currency pairs and rate quotes.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_money::Currency;

use crate::error::{FxError, FxResult};

/// An ordered pair of currencies.
///
/// A rate for the pair is the number of units of `quote` that equal one
/// unit of `base`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base currency.
    pub base: Currency,
    /// Quote (pricing) currency.
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// A rate for a currency pair, with an optional validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// The currency pair.
    pub pair: CurrencyPair,
    /// Units of quote currency per unit of base currency.
    pub rate: Decimal,
    /// When this rate was quoted.
    pub quoted_at: DateTime<Utc>,
    /// When this rate expires. `None` means it never does.
    pub valid_until: Option<DateTime<Utc>>,
}

impl RateQuote {
    /// Create a quote that never expires.
    pub fn new(pair: CurrencyPair, rate: Decimal) -> Self {
        Self {
            pair,
            rate,
            quoted_at: Utc::now(),
            valid_until: None,
        }
    }

    /// Limit the quote's validity to `ttl` after it was quoted.
    ///
    /// Fails if the expiry falls outside the representable date range.
    pub fn valid_for(mut self, ttl: Duration) -> FxResult<Self> {
        let until = self.quoted_at.checked_add_signed(ttl).ok_or_else(|| {
            FxError::Config(format!("Quote TTL {}s for {} is out of range", ttl.num_seconds(), self.pair))
        })?;
        self.valid_until = Some(until);
        Ok(self)
    }

    /// Check if the rate is still valid.
    pub fn is_valid(&self) -> bool {
        self.valid_until.map_or(true, |until| Utc::now() < until)
    }
}
