//! Monetary totals that span several currencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::currency::Currency;
use crate::exchange::{AsyncExchange, Exchange};
use crate::money::Money;

/// A sum of monetary amounts in possibly different currencies.
///
/// Amounts in different currencies cannot be added without an exchange
/// rate, so they are kept side by side, one entry per currency, until the
/// total is converted with an [`Exchange`].
///
/// Entries whose amount works out to zero stay in the map; only
/// [`AggregatedMoney::remove`] (or setting `None`) deletes an entry.
/// Equality is exact map equality, so a zero entry differs from an absent
/// one.
///
/// Summing entries, whether by constructor, [`Extend`] or an operator,
/// panics if a per-currency total overflows the decimal range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Money>", into = "Vec<Money>")]
pub struct AggregatedMoney {
    amounts: HashMap<Currency, Decimal>,
}

impl AggregatedMoney {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregate holding a single amount.
    pub fn with_amount(amount: Decimal, currency: Currency) -> Self {
        Self::from(Money::new(amount, currency))
    }

    /// Create an aggregate holding a single amount given in minor units.
    pub fn with_minor_units(minor_units: i64, currency: Currency) -> Self {
        Self::from(Money::from_minor_units(minor_units, currency))
    }

    /// Sum monetary values, one entry per currency.
    ///
    /// # Panics
    ///
    /// If a per-currency total overflows the decimal range.
    pub fn from_money(money: impl IntoIterator<Item = Money>) -> Self {
        let mut aggregated = Self::new();
        aggregated.extend(money);
        aggregated
    }

    /// Sum several aggregates into one.
    ///
    /// # Panics
    ///
    /// If a per-currency total overflows the decimal range.
    pub fn from_aggregates(aggregates: impl IntoIterator<Item = AggregatedMoney>) -> Self {
        aggregates
            .into_iter()
            .fold(Self::new(), |mut total, aggregated| {
                for (currency, amount) in aggregated.amounts {
                    *total.amounts.entry(currency).or_insert(Decimal::ZERO) += amount;
                }
                total
            })
    }

    /// Get the amount held in `currency`, if any.
    pub fn get(&self, currency: &Currency) -> Option<Decimal> {
        self.amounts.get(currency).copied()
    }

    /// Get the amount held in `currency`, or `default` if there is none.
    pub fn get_or(&self, currency: &Currency, default: Decimal) -> Decimal {
        self.get(currency).unwrap_or(default)
    }

    /// Set the amount held in `currency`, returning the previous amount.
    pub fn insert(&mut self, currency: Currency, amount: Decimal) -> Option<Decimal> {
        self.amounts.insert(currency, amount)
    }

    /// Remove the entry for `currency`, returning its amount.
    pub fn remove(&mut self, currency: &Currency) -> Option<Decimal> {
        self.amounts.remove(currency)
    }

    /// Set or clear the entry for `currency`: `Some` inserts or overwrites,
    /// `None` removes the entry entirely.
    pub fn set(&mut self, currency: Currency, amount: Option<Decimal>) {
        match amount {
            Some(amount) => {
                self.amounts.insert(currency, amount);
            }
            None => {
                self.amounts.remove(&currency);
            }
        }
    }

    /// The distinct currencies present, in no particular order.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.amounts.keys()
    }

    /// Iterate over `(currency, amount)` entries, in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.amounts.iter(),
        }
    }

    /// Number of currencies present.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Split into one [`Money`] per entry.
    pub fn into_money(self) -> Vec<Money> {
        self.amounts
            .into_iter()
            .map(|(currency, amount)| Money::new(amount, currency))
            .collect()
    }

    /// Reduce to a single amount in `base` using the rates quoted by
    /// `exchange`.
    ///
    /// `base` is the currency being converted to; each currency present is
    /// a quote currency, so with GBP/USD at 1.25 an entry of 5 USD
    /// contributes 4 GBP.
    pub fn converted_using<E>(&self, base: &Currency, exchange: &E) -> Result<Money, E::Error>
    where
        E: Exchange + ?Sized,
    {
        Exchange::trade_aggregated(exchange, self, base)
    }

    /// Asynchronous form of [`AggregatedMoney::converted_using`].
    pub async fn converted_using_async<E>(
        &self,
        base: &Currency,
        exchange: &E,
    ) -> Result<Money, E::Error>
    where
        E: AsyncExchange + ?Sized,
    {
        AsyncExchange::trade_aggregated(exchange, self, base).await
    }

    fn map_amounts(mut self, f: impl Fn(Decimal) -> Decimal) -> Self {
        for amount in self.amounts.values_mut() {
            *amount = f(*amount);
        }
        self
    }
}

/// Iterator over the entries of an [`AggregatedMoney`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, Currency, Decimal>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Currency, Decimal);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(currency, amount)| (currency, *amount))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a AggregatedMoney {
    type Item = (&'a Currency, Decimal);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Money> for AggregatedMoney {
    fn from(money: Money) -> Self {
        Self::from_money([money])
    }
}

impl From<Vec<Money>> for AggregatedMoney {
    fn from(money: Vec<Money>) -> Self {
        Self::from_money(money)
    }
}

impl From<AggregatedMoney> for Vec<Money> {
    fn from(aggregated: AggregatedMoney) -> Self {
        aggregated.into_money()
    }
}

impl Extend<Money> for AggregatedMoney {
    fn extend<I: IntoIterator<Item = Money>>(&mut self, iter: I) {
        for money in iter {
            *self.amounts.entry(money.currency).or_insert(Decimal::ZERO) += money.amount;
        }
    }
}

impl FromIterator<Money> for AggregatedMoney {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Self::from_money(iter)
    }
}

impl FromIterator<AggregatedMoney> for AggregatedMoney {
    fn from_iter<I: IntoIterator<Item = AggregatedMoney>>(iter: I) -> Self {
        Self::from_aggregates(iter)
    }
}

impl Sum<Money> for AggregatedMoney {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Self::from_money(iter)
    }
}

impl Sum for AggregatedMoney {
    fn sum<I: Iterator<Item = AggregatedMoney>>(iter: I) -> Self {
        Self::from_aggregates(iter)
    }
}

// Addition

impl Add for AggregatedMoney {
    type Output = AggregatedMoney;

    fn add(self, rhs: AggregatedMoney) -> Self::Output {
        Self::from_aggregates([self, rhs])
    }
}

impl Add<Money> for AggregatedMoney {
    type Output = AggregatedMoney;

    fn add(self, rhs: Money) -> Self::Output {
        self + AggregatedMoney::from(rhs)
    }
}

impl Add<AggregatedMoney> for Money {
    type Output = AggregatedMoney;

    fn add(self, rhs: AggregatedMoney) -> Self::Output {
        AggregatedMoney::from(self) + rhs
    }
}

impl AddAssign for AggregatedMoney {
    fn add_assign(&mut self, rhs: AggregatedMoney) {
        *self = std::mem::take(self) + rhs;
    }
}

impl AddAssign<Money> for AggregatedMoney {
    fn add_assign(&mut self, rhs: Money) {
        *self = std::mem::take(self) + rhs;
    }
}

// Subtraction

impl Sub for AggregatedMoney {
    type Output = AggregatedMoney;

    /// Subtract every entry of `rhs`, creating entries the left side lacks.
    fn sub(mut self, rhs: AggregatedMoney) -> Self::Output {
        for (currency, amount) in rhs.amounts {
            *self.amounts.entry(currency).or_insert(Decimal::ZERO) -= amount;
        }
        self
    }
}

impl Sub<Money> for AggregatedMoney {
    type Output = AggregatedMoney;

    fn sub(self, rhs: Money) -> Self::Output {
        self - AggregatedMoney::from(rhs)
    }
}

impl Sub<AggregatedMoney> for Money {
    type Output = AggregatedMoney;

    fn sub(self, rhs: AggregatedMoney) -> Self::Output {
        AggregatedMoney::from(self) - rhs
    }
}

impl SubAssign for AggregatedMoney {
    fn sub_assign(&mut self, rhs: AggregatedMoney) {
        *self = std::mem::take(self) - rhs;
    }
}

impl SubAssign<Money> for AggregatedMoney {
    fn sub_assign(&mut self, rhs: Money) {
        *self = std::mem::take(self) - rhs;
    }
}

// Scaling

impl Mul<Decimal> for AggregatedMoney {
    type Output = AggregatedMoney;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.map_amounts(|amount| amount * rhs)
    }
}

impl Mul<i64> for AggregatedMoney {
    type Output = AggregatedMoney;

    fn mul(self, rhs: i64) -> Self::Output {
        self * Decimal::from(rhs)
    }
}

impl MulAssign<Decimal> for AggregatedMoney {
    fn mul_assign(&mut self, rhs: Decimal) {
        *self = std::mem::take(self) * rhs;
    }
}

impl MulAssign<i64> for AggregatedMoney {
    fn mul_assign(&mut self, rhs: i64) {
        *self = std::mem::take(self) * rhs;
    }
}

impl Div<Decimal> for AggregatedMoney {
    type Output = AggregatedMoney;

    fn div(self, rhs: Decimal) -> Self::Output {
        self.map_amounts(|amount| amount / rhs)
    }
}

impl Div<i64> for AggregatedMoney {
    type Output = AggregatedMoney;

    fn div(self, rhs: i64) -> Self::Output {
        self / Decimal::from(rhs)
    }
}

impl DivAssign<Decimal> for AggregatedMoney {
    fn div_assign(&mut self, rhs: Decimal) {
        *self = std::mem::take(self) / rhs;
    }
}

impl DivAssign<i64> for AggregatedMoney {
    fn div_assign(&mut self, rhs: i64) {
        *self = std::mem::take(self) / rhs;
    }
}

impl Neg for AggregatedMoney {
    type Output = AggregatedMoney;

    fn neg(self) -> Self::Output {
        self.map_amounts(|amount| -amount)
    }
}
