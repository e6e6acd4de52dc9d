//! Tally FX
//!
//! Exchange rates for converting [`tally_money`] values.
//!
//! # Features
//!
//! - Concurrent in-memory table of directly quoted rates
//! - Optional expiry per quote
//! - Loading from JSON files or environment variables
//! - Usable as both a synchronous and an asynchronous exchange
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_fx::RateTable;
//! use tally_money::{Currency, Money};
//! use rust_decimal_macros::dec;
//!
//! let rates = RateTable::new();
//! rates.set_rate(Currency::gbp(), Currency::usd(), dec!(1.25))?;
//!
//! let gbp = Money::new(dec!(5), Currency::usd()).converted_using(&Currency::gbp(), &rates)?;
//! assert_eq!(gbp, Money::new(dec!(4), Currency::gbp()));
//! ```

pub mod config;
pub mod error;
pub mod quote;
pub mod table;

pub use config::{RateEntry, RateTableConfig};
pub use error::{FxError, FxResult};
pub use quote::{CurrencyPair, RateQuote};
pub use table::RateTable;
