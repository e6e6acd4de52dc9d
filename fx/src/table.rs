//! In-memory exchange rate table.

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tally_money::{AsyncExchange, Currency, Exchange};
use tracing::{debug, info, instrument};

use crate::config::RateTableConfig;
use crate::error::{FxError, FxResult};
use crate::quote::{CurrencyPair, RateQuote};

/// Thread-safe table of directly quoted exchange rates.
///
/// Only the exact pair asked for is consulted: a quote for GBP/USD does not
/// answer USD/GBP, and no cross rates are derived.
#[derive(Debug, Default)]
pub struct RateTable {
    quotes: DashMap<CurrencyPair, RateQuote>,
}

impl RateTable {
    /// Create an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rate table loaded from configuration.
    pub fn from_config(config: &RateTableConfig) -> FxResult<Self> {
        config.validate()?;
        let ttl = config.quote_ttl()?;

        let table = Self::new();
        for entry in &config.rates {
            let pair = CurrencyPair::new(entry.base.parse()?, entry.quote.parse()?);
            let mut quote = RateQuote::new(pair, entry.rate);
            if let Some(ttl) = ttl {
                quote = quote.valid_for(ttl)?;
            }
            table.set_quote(quote)?;
        }

        info!(
            rates = table.len(),
            quote_ttl_secs = ?config.quote_ttl_secs,
            "Loaded rate table"
        );

        Ok(table)
    }

    /// Set a rate that never expires.
    pub fn set_rate(&self, base: Currency, quote: Currency, rate: Decimal) -> FxResult<()> {
        self.set_quote(RateQuote::new(CurrencyPair::new(base, quote), rate))
    }

    /// Insert or replace the quote for its pair.
    pub fn set_quote(&self, quote: RateQuote) -> FxResult<()> {
        if quote.rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate {
                pair: quote.pair,
                rate: quote.rate,
            });
        }

        debug!(pair = %quote.pair, rate = %quote.rate, "Set rate");
        self.quotes.insert(quote.pair.clone(), quote);
        Ok(())
    }

    /// Remove the quote for a pair.
    pub fn remove(&self, pair: &CurrencyPair) -> Option<RateQuote> {
        self.quotes.remove(pair).map(|(_, quote)| quote)
    }

    /// Get the quote held for a pair, whether or not it is still valid.
    pub fn get(&self, pair: &CurrencyPair) -> Option<RateQuote> {
        self.quotes.get(pair).map(|quote| quote.clone())
    }

    /// Get the number of quotes held.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Remove every quote.
    pub fn clear(&self) {
        self.quotes.clear();
    }

    /// All pairs currently quoted, in no particular order.
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        self.quotes.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Evict expired quotes, returning how many were removed.
    pub fn evict_expired(&self) -> usize {
        let before = self.quotes.len();
        self.quotes.retain(|_, quote| quote.is_valid());
        let evicted = before.saturating_sub(self.quotes.len());

        if evicted > 0 {
            debug!(evicted, "Evicted expired rates");
        }
        evicted
    }

    /// Look up a valid rate for `base`/`quote`.
    #[instrument(skip_all, fields(base = %base, quote = %quote))]
    pub fn lookup(&self, base: &Currency, quote: &Currency) -> FxResult<Decimal> {
        let pair = CurrencyPair::new(base.clone(), quote.clone());

        let entry = self
            .quotes
            .get(&pair)
            .ok_or_else(|| FxError::RateNotAvailable(pair.clone()))?;

        if !entry.is_valid() {
            debug!("Rate expired");
            return Err(FxError::RateExpired(pair));
        }

        debug!(rate = %entry.rate, "Rate found");
        Ok(entry.rate)
    }
}

impl Exchange for RateTable {
    type Error = FxError;

    fn rate(&self, base: &Currency, quote: &Currency) -> FxResult<Decimal> {
        self.lookup(base, quote)
    }
}

#[async_trait]
impl AsyncExchange for RateTable {
    type Error = FxError;

    async fn rate(&self, base: &Currency, quote: &Currency) -> FxResult<Decimal> {
        self.lookup(base, quote)
    }
}
