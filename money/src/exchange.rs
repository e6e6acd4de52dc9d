//! Exchange rate sources and the trade algorithms built on them.
//!
//! A rate is quoted as the number of units of the quote currency that equal
//! one unit of the base currency. Converting an amount held in the quote
//! currency into the base currency therefore divides by the rate.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

use crate::aggregated::AggregatedMoney;
use crate::currency::Currency;
use crate::money::Money;

/// A synchronous source of exchange rates.
///
/// Implementors supply [`Exchange::rate`]; the trade operations are derived
/// from it. Errors are opaque to this crate and are returned to the caller
/// unchanged.
pub trait Exchange {
    /// Error raised when a rate cannot be provided.
    type Error;

    /// Units of `quote` per one unit of `base`.
    fn rate(&self, base: &Currency, quote: &Currency) -> Result<Decimal, Self::Error>;

    /// Convert `money` into `currency`.
    ///
    /// Returns `money` unchanged, without looking up a rate, when it is
    /// already held in `currency`.
    fn trade(&self, money: &Money, currency: &Currency) -> Result<Money, Self::Error> {
        if money.currency == *currency {
            debug!(currency = %currency, "Same currency, no rate needed");
            return Ok(money.clone());
        }

        let rate = self.rate(currency, &money.currency)?;
        Ok(apply_rate(money, currency, rate))
    }

    /// Reduce every entry of `aggregated` into a single amount in
    /// `currency`.
    ///
    /// Rates are looked up one currency at a time; the first failure aborts
    /// the reduction.
    fn trade_aggregated(
        &self,
        aggregated: &AggregatedMoney,
        currency: &Currency,
    ) -> Result<Money, Self::Error> {
        let Partition {
            mut total,
            foreign,
        } = Partition::split(aggregated, currency);

        for (quote, amount) in foreign {
            let rate = self.rate(currency, quote)?;
            total.amount += apply_rate(&Money::new(amount, quote.clone()), currency, rate).amount;
        }

        Ok(total)
    }
}

/// An asynchronous source of exchange rates.
///
/// Same contract as [`Exchange`], with a suspension point at each rate
/// lookup.
#[async_trait]
pub trait AsyncExchange: Send + Sync {
    /// Error raised when a rate cannot be provided.
    type Error: Send;

    /// Units of `quote` per one unit of `base`.
    async fn rate(&self, base: &Currency, quote: &Currency) -> Result<Decimal, Self::Error>;

    /// Convert `money` into `currency`.
    async fn trade(&self, money: &Money, currency: &Currency) -> Result<Money, Self::Error> {
        if money.currency == *currency {
            debug!(currency = %currency, "Same currency, no rate needed");
            return Ok(money.clone());
        }

        let rate = self.rate(currency, &money.currency).await?;
        Ok(apply_rate(money, currency, rate))
    }

    /// Reduce every entry of `aggregated` into a single amount in
    /// `currency`.
    async fn trade_aggregated(
        &self,
        aggregated: &AggregatedMoney,
        currency: &Currency,
    ) -> Result<Money, Self::Error> {
        let Partition {
            mut total,
            foreign,
        } = Partition::split(aggregated, currency);

        for (quote, amount) in foreign {
            let rate = self.rate(currency, quote).await?;
            total.amount += apply_rate(&Money::new(amount, quote.clone()), currency, rate).amount;
        }

        Ok(total)
    }
}

/// Entries of an aggregate, split by whether they need a rate to reach the
/// target currency.
struct Partition<'a> {
    /// Sum of the entries already held in the target currency.
    total: Money,
    /// Entries held in any other currency.
    foreign: Vec<(&'a Currency, Decimal)>,
}

impl<'a> Partition<'a> {
    fn split(aggregated: &'a AggregatedMoney, currency: &Currency) -> Self {
        let mut total = Money::zero(currency.clone());
        let mut foreign = Vec::with_capacity(aggregated.len());

        for (entry_currency, amount) in aggregated.iter() {
            if entry_currency == currency {
                total.amount += amount;
            } else {
                foreign.push((entry_currency, amount));
            }
        }

        debug!(
            currency = %currency,
            foreign = foreign.len(),
            "Partitioned aggregate for trade"
        );

        Self { total, foreign }
    }
}

fn apply_rate(money: &Money, currency: &Currency, rate: Decimal) -> Money {
    let converted = money.converted(currency, rate);
    debug!(
        from = %money.currency,
        to = %currency,
        rate = %rate,
        amount = %money.amount,
        result = %converted.amount,
        "Applied exchange rate"
    );
    converted
}

#[cfg(any(test, feature = "test-utils"))]
type RateFn<E> = Box<dyn Fn(&Currency, &Currency) -> Result<Decimal, E> + Send + Sync>;

/// Exchange backed by a closure, counting rate lookups.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockExchange<E> {
    rate: RateFn<E>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> MockExchange<E> {
    /// Create a mock exchange answering rate lookups with `rate`.
    pub fn new(
        rate: impl Fn(&Currency, &Currency) -> Result<Decimal, E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            rate: Box::new(rate),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of rate lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Exchange for MockExchange<E> {
    type Error = E;

    fn rate(&self, base: &Currency, quote: &Currency) -> Result<Decimal, E> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        (self.rate)(base, quote)
    }
}

/// Asynchronous exchange backed by a closure, counting rate lookups.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockAsyncExchange<E> {
    inner: MockExchange<E>,
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> MockAsyncExchange<E> {
    /// Create a mock exchange answering rate lookups with `rate`.
    pub fn new(
        rate: impl Fn(&Currency, &Currency) -> Result<Decimal, E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: MockExchange::new(rate),
        }
    }

    /// Number of rate lookups made so far.
    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl<E: Send + 'static> AsyncExchange for MockAsyncExchange<E> {
    type Error = E;

    async fn rate(&self, base: &Currency, quote: &Currency) -> Result<Decimal, E> {
        Exchange::rate(&self.inner, base, quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Unavailable(String),
    }

    fn foo() -> Currency {
        Currency::custom("foo", 0)
    }

    fn bar() -> Currency {
        Currency::custom("bar", 1)
    }

    fn biz() -> Currency {
        Currency::custom("biz", 2)
    }

    fn baz() -> Currency {
        Currency::custom("baz", 3)
    }

    fn fixed_rates(base: &Currency, quote: &Currency) -> Result<Decimal, TestError> {
        match (base.id(), quote.id()) {
            ("baz", "foo") => Ok(dec!(2)),
            ("baz", "bar") => Ok(dec!(1.25)),
            ("baz", "biz") => Ok(dec!(0.75)),
            (base, quote) => Err(TestError::Unavailable(format!("{}/{}", base, quote))),
        }
    }

    fn never_called(_: &Currency, _: &Currency) -> Result<Decimal, TestError> {
        panic!("rate must not be looked up for the same currency")
    }

    fn failing(base: &Currency, quote: &Currency) -> Result<Decimal, TestError> {
        Err(TestError::Unavailable(format!("{}/{}", base.id(), quote.id())))
    }

    #[test]
    fn test_trade_divides_by_rate() {
        let exchange = MockExchange::new(|_: &Currency, _: &Currency| Ok::<_, TestError>(dec!(2)));
        let money = Money::new(dec!(10.5), foo());

        let traded = exchange.trade(&money, &bar()).unwrap();

        assert_eq!(traded, Money::new(dec!(5.25), bar()));
        assert_eq!(exchange.calls(), 1);
    }

    #[test]
    fn test_trade_passes_target_as_base() {
        let exchange = MockExchange::new(|base: &Currency, quote: &Currency| {
            assert_eq!(*base, Currency::gbp());
            assert_eq!(*quote, Currency::usd());
            Ok::<_, TestError>(dec!(1.25))
        });

        let traded = exchange
            .trade(&Money::new(dec!(5), Currency::usd()), &Currency::gbp())
            .unwrap();
        assert_eq!(traded, Money::new(dec!(4), Currency::gbp()));
    }

    #[test]
    fn test_trade_same_currency_skips_rate() {
        let exchange = MockExchange::new(never_called);
        let money = Money::new(dec!(10.5), foo());

        assert_eq!(exchange.trade(&money, &foo()).unwrap(), money);
        assert_eq!(exchange.calls(), 0);
    }

    #[test]
    fn test_trade_propagates_error() {
        let exchange = MockExchange::new(failing);

        let err = exchange
            .trade(&Money::new(dec!(1), foo()), &bar())
            .unwrap_err();
        assert_eq!(err, TestError::Unavailable("bar/foo".to_string()));
    }

    #[test]
    fn test_trade_aggregated() {
        let exchange = MockExchange::new(fixed_rates);
        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(5), bar()),
            Money::new(dec!(3), biz()),
        ]);

        let traded = exchange.trade_aggregated(&aggregated, &baz()).unwrap();

        assert_eq!(traded, Money::new(dec!(13), baz()));
        assert_eq!(exchange.calls(), 3);
    }

    #[test]
    fn test_trade_aggregated_sums_target_entry_directly() {
        let exchange = MockExchange::new(fixed_rates);
        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(1.5), baz()),
        ]);

        let traded = exchange.trade_aggregated(&aggregated, &baz()).unwrap();

        assert_eq!(traded, Money::new(dec!(6.5), baz()));
        assert_eq!(exchange.calls(), 1);
    }

    #[test]
    fn test_trade_aggregated_single_currency_skips_rate() {
        let exchange = MockExchange::new(never_called);
        let aggregated = AggregatedMoney::with_amount(dec!(7.25), foo());

        let traded = exchange.trade_aggregated(&aggregated, &foo()).unwrap();

        assert_eq!(traded, Money::new(dec!(7.25), foo()));
        assert_eq!(exchange.calls(), 0);
    }

    #[test]
    fn test_trade_aggregated_empty_is_zero() {
        let exchange = MockExchange::new(never_called);

        let traded = exchange
            .trade_aggregated(&AggregatedMoney::new(), &foo())
            .unwrap();
        assert_eq!(traded, Money::zero(foo()));
    }

    #[test]
    fn test_trade_aggregated_aborts_on_first_error() {
        let exchange = MockExchange::new(failing);
        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(5), bar()),
        ]);

        assert!(exchange.trade_aggregated(&aggregated, &baz()).is_err());
        assert_eq!(exchange.calls(), 1);
    }

    #[test]
    fn test_converted_using() {
        let exchange = MockExchange::new(fixed_rates);

        let money = Money::new(dec!(5), bar()).converted_using(&baz(), &exchange);
        assert_eq!(money, Ok(Money::new(dec!(4), baz())));

        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(3), biz()),
        ]);
        assert_eq!(
            aggregated.converted_using(&baz(), &exchange),
            Ok(Money::new(dec!(9), baz()))
        );
    }

    #[test]
    fn test_exchange_as_trait_object() {
        let exchange: Box<dyn Exchange<Error = TestError>> = Box::new(MockExchange::new(fixed_rates));

        let money = Money::new(dec!(3), biz()).converted_using(&baz(), exchange.as_ref());
        assert_eq!(money, Ok(Money::new(dec!(4), baz())));
    }

    #[tokio::test]
    async fn test_async_trade() {
        let exchange = MockAsyncExchange::new(|_: &Currency, _: &Currency| Ok::<_, TestError>(dec!(2)));

        let traded = AsyncExchange::trade(&exchange, &Money::new(dec!(10.5), foo()), &bar())
            .await
            .unwrap();

        assert_eq!(traded, Money::new(dec!(5.25), bar()));
        assert_eq!(exchange.calls(), 1);
    }

    #[tokio::test]
    async fn test_async_trade_same_currency_skips_rate() {
        let exchange = MockAsyncExchange::new(never_called);
        let money = Money::new(dec!(10.5), foo());

        let traded = money.converted_using_async(&foo(), &exchange).await.unwrap();

        assert_eq!(traded, money);
        assert_eq!(exchange.calls(), 0);
    }

    #[tokio::test]
    async fn test_async_trade_aggregated() {
        let exchange = MockAsyncExchange::new(fixed_rates);
        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(5), bar()),
            Money::new(dec!(3), biz()),
        ]);

        let traded = aggregated
            .converted_using_async(&baz(), &exchange)
            .await
            .unwrap();

        assert_eq!(traded, Money::new(dec!(13), baz()));
        assert_eq!(exchange.calls(), 3);
    }

    #[tokio::test]
    async fn test_async_trade_aggregated_single_currency_skips_rate() {
        let exchange = MockAsyncExchange::new(never_called);
        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(7.25), foo()),
            Money::new(dec!(2.75), foo()),
        ]);

        let traded = AsyncExchange::trade_aggregated(&exchange, &aggregated, &foo())
            .await
            .unwrap();

        assert_eq!(traded, Money::new(dec!(10), foo()));
        assert_eq!(exchange.calls(), 0);
    }

    #[tokio::test]
    async fn test_async_trade_aggregated_sums_target_entry_directly() {
        let exchange = MockAsyncExchange::new(|base: &Currency, quote: &Currency| {
            assert_ne!(base, quote, "rate looked up for the target currency");
            fixed_rates(base, quote)
        });
        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(5), bar()),
            Money::new(dec!(1.5), baz()),
        ]);

        let traded = aggregated
            .converted_using_async(&baz(), &exchange)
            .await
            .unwrap();

        assert_eq!(traded, Money::new(dec!(10.5), baz()));
        assert_eq!(exchange.calls(), 2);
    }

    #[tokio::test]
    async fn test_async_trade_propagates_error() {
        let exchange = MockAsyncExchange::new(failing);

        let err = Money::new(dec!(1), foo())
            .converted_using_async(&bar(), &exchange)
            .await
            .unwrap_err();
        assert_eq!(err, TestError::Unavailable("bar/foo".to_string()));

        let aggregated = AggregatedMoney::from_money([
            Money::new(dec!(10), foo()),
            Money::new(dec!(5), bar()),
        ]);
        assert!(aggregated
            .converted_using_async(&baz(), &exchange)
            .await
            .is_err());
        assert_eq!(exchange.calls(), 2);
    }
}
