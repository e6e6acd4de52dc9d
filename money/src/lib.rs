//! Tally Money
//!
//! Exact decimal monetary values and the currencies they are held in.
//!
//! # Features
//!
//! - ISO 4217 catalog with a thread-safe, runtime-extensible registry
//! - Custom currencies for application-defined units of account
//! - [`Money`] arithmetic with explicit rounding modes
//! - [`AggregatedMoney`] for totals spanning several currencies
//! - [`Exchange`] and [`AsyncExchange`] traits for converting between them
//! - Locale-aware formatting with grouping and sign control
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_money::{AggregatedMoney, Currency, Money};
//! use rust_decimal_macros::dec;
//!
//! let total: AggregatedMoney = Money::new(dec!(12.50), Currency::usd())
//!     + Money::new(dec!(8), Currency::eur());
//!
//! // Reduce to a single currency with any exchange rate source.
//! let usd = total.converted_using(&Currency::usd(), &rates)?;
//! ```

pub mod aggregated;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod format;
pub mod iso4217;
pub mod money;
pub mod registry;
pub mod rounding;

pub use aggregated::AggregatedMoney;
pub use currency::{Currency, CustomCurrency};
pub use error::{MoneyError, MoneyResult};
pub use exchange::{AsyncExchange, Exchange};
pub use format::{Locale, MoneyFormat, SignDisplay};
pub use iso4217::Iso4217Currency;
pub use money::Money;
pub use registry::Iso4217Registry;
pub use rounding::RoundingMode;

#[cfg(any(test, feature = "test-utils"))]
pub use exchange::{MockAsyncExchange, MockExchange};
