//! Rate table configuration.

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env::{self, VarError};
use std::path::Path;

use crate::error::{FxError, FxResult};

/// Environment variable naming a JSON rate file.
pub const RATES_PATH_ENV: &str = "TALLY_FX_RATES";

/// Environment variable overriding the quote lifetime, in seconds.
pub const QUOTE_TTL_ENV: &str = "TALLY_FX_QUOTE_TTL_SECS";

/// A single configured rate.
///
/// Currencies are ISO 4217 alphabetic codes resolved through the global
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Base currency code.
    pub base: String,
    /// Quote currency code.
    pub quote: String,
    /// Units of quote currency per unit of base currency.
    pub rate: Decimal,
}

/// Initial contents of a [`RateTable`](crate::RateTable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTableConfig {
    /// Rates loaded into the table.
    pub rates: Vec<RateEntry>,
    /// Lifetime of each loaded quote. Quotes never expire when unset.
    pub quote_ttl_secs: Option<u64>,
}

impl RateTableConfig {
    /// Parse configuration from a JSON document.
    pub fn from_json(json: &str) -> FxResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> FxResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from environment variables.
    ///
    /// Starts from the file named by `TALLY_FX_RATES`, if set, then applies
    /// `TALLY_FX_QUOTE_TTL_SECS`.
    pub fn from_env() -> FxResult<Self> {
        let mut config = match env_var(RATES_PATH_ENV)? {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(ttl) = env_var(QUOTE_TTL_ENV)? {
            let ttl = ttl
                .parse()
                .map_err(|_| FxError::Config(format!("{} must be a number of seconds", QUOTE_TTL_ENV)))?;
            config.quote_ttl_secs = Some(ttl);
        }

        Ok(config)
    }

    /// Lifetime of each loaded quote, if quotes expire.
    pub fn quote_ttl(&self) -> FxResult<Option<Duration>> {
        self.quote_ttl_secs
            .map(|secs| {
                i64::try_from(secs)
                    .ok()
                    .and_then(Duration::try_seconds)
                    .ok_or_else(|| FxError::Config(format!("Quote TTL {}s is out of range", secs)))
            })
            .transpose()
    }

    /// Validate configuration.
    pub fn validate(&self) -> FxResult<()> {
        if self.quote_ttl_secs == Some(0) {
            return Err(FxError::Config("Quote TTL cannot be 0".to_string()));
        }
        self.quote_ttl()?;

        let mut seen = HashSet::new();
        for entry in &self.rates {
            if entry.rate <= Decimal::ZERO {
                return Err(FxError::Config(format!(
                    "Rate for {}/{} must be positive",
                    entry.base, entry.quote
                )));
            }
            if !seen.insert((entry.base.as_str(), entry.quote.as_str())) {
                return Err(FxError::Config(format!(
                    "Duplicate rate for {}/{}",
                    entry.base, entry.quote
                )));
            }
        }

        Ok(())
    }
}

/// Read an environment variable, treating only absence as unset.
fn env_var(name: &str) -> FxResult<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(FxError::Config(format!("{} is not valid unicode", name))),
    }
}
