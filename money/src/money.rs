//! A monetary amount in a single currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::aggregated::AggregatedMoney;
use crate::currency::Currency;
use crate::error::MoneyResult;
use crate::exchange::{AsyncExchange, Exchange};
use crate::rounding::RoundingMode;

/// A monetary amount with currency.
///
/// The amount keeps whatever precision arithmetic produced; it is only
/// brought down to the currency's minor units when rounding is requested.
/// Adding or subtracting two `Money` values always yields an
/// [`AggregatedMoney`], even when both share a currency.
///
/// # Panics
///
/// Arithmetic operators panic when the result overflows the decimal range
/// (about ±7.9 × 10²⁸) or when dividing by zero, the same way
/// [`Decimal`]'s own operators do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The amount value (high precision decimal).
    pub amount: Decimal,
    /// The currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money instance.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create from a count of minor units, e.g. cents.
    ///
    /// # Panics
    ///
    /// If the currency uses more fraction digits than a decimal can hold.
    pub fn from_minor_units(minor_units: i64, currency: Currency) -> Self {
        let scale = currency.minor_units();
        assert!(
            scale <= Decimal::MAX_SCALE,
            "currency {} has {} fraction digits, at most {} are supported",
            currency,
            scale,
            Decimal::MAX_SCALE
        );
        Self::new(Decimal::new(minor_units, scale), currency)
    }

    /// Create from a string value.
    pub fn from_str(value: &str, currency: Currency) -> MoneyResult<Self> {
        Ok(Self::new(value.parse()?, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Get the absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency.clone())
    }

    /// The amount as a whole number of minor units, after banker's
    /// rounding to the currency's fraction digits.
    ///
    /// Returns `None` if the count does not fit in an `i64`.
    pub fn to_minor_units(&self) -> Option<i64> {
        let scale = self.currency.minor_units();
        let mut amount = RoundingMode::Bankers.round(self.amount, scale);
        amount.rescale(scale);
        if amount.scale() != scale {
            return None;
        }
        i64::try_from(amount.mantissa()).ok()
    }

    /// Round to the currency's minor units using banker's rounding.
    pub fn rounded(&self) -> Self {
        self.rounded_with(None, RoundingMode::Bankers)
    }

    /// Round to `scale` decimal places, or the currency's minor units when
    /// no scale is given.
    pub fn rounded_with(&self, scale: Option<u32>, mode: RoundingMode) -> Self {
        let scale = scale.unwrap_or_else(|| self.currency.minor_units());
        Self::new(mode.round(self.amount, scale), self.currency.clone())
    }

    /// In-place form of [`Money::rounded`].
    pub fn round(&mut self) {
        *self = self.rounded();
    }

    /// In-place form of [`Money::rounded_with`].
    pub fn round_with(&mut self, scale: Option<u32>, mode: RoundingMode) {
        *self = self.rounded_with(scale, mode);
    }

    /// Convert to `base` at the given rate.
    ///
    /// `base` is the currency being converted to and the amount's own
    /// currency is the quote: the rate is how many quote units buy one unit
    /// of `base`. With GBP/USD at 1.25, 5 USD converts to 4 GBP.
    ///
    /// No rounding is applied.
    ///
    /// # Panics
    ///
    /// If `rate` is zero, like any decimal division by zero.
    pub fn converted(&self, base: &Currency, rate: Decimal) -> Self {
        Self::new(self.amount / rate, base.clone())
    }

    /// In-place form of [`Money::converted`].
    pub fn convert(&mut self, base: &Currency, rate: Decimal) {
        *self = self.converted(base, rate);
    }

    /// Convert to `base` using the rate quoted by `exchange`.
    pub fn converted_using<E>(&self, base: &Currency, exchange: &E) -> Result<Money, E::Error>
    where
        E: Exchange + ?Sized,
    {
        Exchange::trade(exchange, self, base)
    }

    /// Convert to `base` using the rate quoted by an asynchronous exchange.
    pub async fn converted_using_async<E>(
        &self,
        base: &Currency,
        exchange: &E,
    ) -> Result<Money, E::Error>
    where
        E: AsyncExchange + ?Sized,
    {
        AsyncExchange::trade(exchange, self, base).await
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// Money with Money

impl Add for Money {
    type Output = AggregatedMoney;

    fn add(self, rhs: Money) -> Self::Output {
        AggregatedMoney::from(self) + rhs
    }
}

impl Sub for Money {
    type Output = AggregatedMoney;

    fn sub(self, rhs: Money) -> Self::Output {
        AggregatedMoney::from(self) - rhs
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money::new(-self.amount, self.currency)
    }
}

// Money with Decimal

impl Add<Decimal> for Money {
    type Output = Money;

    fn add(self, rhs: Decimal) -> Self::Output {
        Money::new(self.amount + rhs, self.currency)
    }
}

impl Add<Money> for Decimal {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        rhs + self
    }
}

impl Sub<Decimal> for Money {
    type Output = Money;

    fn sub(self, rhs: Decimal) -> Self::Output {
        Money::new(self.amount - rhs, self.currency)
    }
}

impl Sub<Money> for Decimal {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        self + -rhs
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Money::new(self.amount * rhs, self.currency)
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, rhs: Money) -> Self::Output {
        rhs * self
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, rhs: Decimal) -> Self::Output {
        Money::new(self.amount / rhs, self.currency)
    }
}

impl Div<Money> for Decimal {
    type Output = Money;

    fn div(self, rhs: Money) -> Self::Output {
        Money::new(self / rhs.amount, rhs.currency)
    }
}

impl AddAssign<Decimal> for Money {
    fn add_assign(&mut self, rhs: Decimal) {
        self.amount += rhs;
    }
}

impl SubAssign<Decimal> for Money {
    fn sub_assign(&mut self, rhs: Decimal) {
        self.amount -= rhs;
    }
}

impl MulAssign<Decimal> for Money {
    fn mul_assign(&mut self, rhs: Decimal) {
        self.amount *= rhs;
    }
}

impl DivAssign<Decimal> for Money {
    fn div_assign(&mut self, rhs: Decimal) {
        self.amount /= rhs;
    }
}

// Money with integers, by way of Decimal

macro_rules! integer_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {
        $(
            impl $op<i64> for Money {
                type Output = Money;

                fn $method(self, rhs: i64) -> Self::Output {
                    $op::$method(self, Decimal::from(rhs))
                }
            }

            impl $op<Money> for i64 {
                type Output = Money;

                fn $method(self, rhs: Money) -> Self::Output {
                    $op::$method(Decimal::from(self), rhs)
                }
            }

            impl $assign<i64> for Money {
                fn $assign_method(&mut self, rhs: i64) {
                    $assign::$assign_method(self, Decimal::from(rhs));
                }
            }
        )*
    };
}

integer_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoneyError;
    use rust_decimal_macros::dec;

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

    #[test]
    fn test_money_new() {
        let money = Money::new(dec!(2.5), foo());
        assert_eq!(money.amount, dec!(2.5));
        assert_eq!(money.currency, foo());
        assert_eq!(money.currency.minor_units(), 0);

        let negative = Money::new(dec!(-2.5), foo());
        assert_eq!(negative.amount, dec!(-2.5));
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(Money::from_minor_units(50, biz()).amount, dec!(0.5));
        assert_eq!(Money::from_minor_units(-50, biz()).amount, dec!(-0.5));
        assert_eq!(Money::from_minor_units(1_000, biz()).amount, dec!(10));
        assert_eq!(Money::from_minor_units(1_000, Currency::jpy()).amount, dec!(1000));
        assert_eq!(Money::from_minor_units(1_234, baz()).amount, dec!(1.234));
    }

    #[test]
    #[should_panic(expected = "fraction digits")]
    fn test_from_minor_units_rejects_unrepresentable_scale() {
        Money::from_minor_units(1, Currency::custom("deep", 29));
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(Money::new(dec!(10), biz()).to_minor_units(), Some(1_000));
        assert_eq!(Money::new(dec!(-0.125), biz()).to_minor_units(), Some(-12));
        assert_eq!(Money::new(dec!(2.5), foo()).to_minor_units(), Some(2));
        assert_eq!(Money::from_minor_units(-42, baz()).to_minor_units(), Some(-42));
    }

    #[test]
    fn test_from_str() {
        let money = Money::from_str("100.00", Currency::usd()).unwrap();
        assert_eq!(money.amount, dec!(100));

        let err = Money::from_str("one hundred", Currency::usd()).unwrap_err();
        assert!(matches!(err, MoneyError::InvalidAmount(_)));
    }

    #[test]
    fn test_predicates() {
        assert!(Money::zero(foo()).is_zero());
        assert!(Money::new(dec!(0.01), biz()).is_positive());
        assert!(Money::new(dec!(-0.01), biz()).is_negative());
        assert_eq!(Money::new(dec!(-3), foo()).abs(), Money::new(dec!(3), foo()));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Money::new(dec!(1), foo()), Money::new(dec!(1), foo()));
        assert_eq!(Money::new(dec!(1.00), foo()), Money::new(dec!(1), foo()));
        assert_ne!(Money::new(dec!(1), foo()), Money::new(dec!(1), bar()));
        assert_ne!(Money::new(dec!(1), foo()), Money::new(dec!(1.1), foo()));
    }

    #[test]
    fn test_rounding_defaults_to_bankers_at_currency_scale() {
        let money = Money::new(dec!(2.5), foo());
        assert_eq!(money.rounded().amount, dec!(2));

        let mut money = Money::new(dec!(2.5), foo());
        money.round();
        assert_eq!(money.amount, dec!(2));

        let money = Money::new(dec!(2.3333333), baz());
        assert_eq!(money.rounded().amount, dec!(2.333));

        let mut money = Money::new(dec!(2.3333333), baz());
        money.round();
        assert_eq!(money.amount, dec!(2.333));
    }

    #[test]
    fn test_rounding_with_scale_and_mode() {
        let money = Money::new(dec!(2.345), biz());
        assert_eq!(money.rounded_with(Some(1), RoundingMode::Bankers).amount, dec!(2.3));
        assert_eq!(money.rounded_with(None, RoundingMode::Plain).amount, dec!(2.35));
        assert_eq!(money.rounded_with(None, RoundingMode::Bankers).amount, dec!(2.34));
        assert_eq!(money.rounded_with(Some(0), RoundingMode::Up).amount, dec!(3));

        let mut money = Money::new(dec!(-2.345), biz());
        money.round_with(None, RoundingMode::Down);
        assert_eq!(money.amount, dec!(-2.35));
    }

    #[test]
    fn test_converted_divides_by_rate() {
        let money = Money::new(dec!(10), foo());
        assert_eq!(money.converted(&bar(), dec!(0.5)), Money::new(dec!(20), bar()));

        let mut money = Money::new(dec!(10), foo());
        money.convert(&bar(), dec!(0.5));
        assert_eq!(money, Money::new(dec!(20), bar()));

        let dollars = Money::new(dec!(5), Currency::usd());
        assert_eq!(
            dollars.converted(&Currency::gbp(), dec!(1.25)),
            Money::new(dec!(4), Currency::gbp())
        );
    }

    #[test]
    fn test_converted_keeps_full_precision() {
        let money = Money::new(dec!(10), biz());
        let converted = money.converted(&foo(), dec!(3));
        assert_eq!(converted.amount, dec!(10) / dec!(3));
        assert_eq!(converted.rounded().amount, dec!(3));
    }

    #[test]
    #[should_panic]
    fn test_converted_with_zero_rate_panics() {
        Money::new(dec!(10), foo()).converted(&bar(), Decimal::ZERO);
    }

    #[test]
    fn test_add_decimal_and_integer() {
        let money = Money::new(dec!(1), foo());

        assert_eq!(money.clone() + dec!(5), Money::new(dec!(6), foo()));
        assert_eq!(money.clone() + dec!(-1), Money::new(dec!(0), foo()));
        assert_eq!(dec!(3) + money.clone(), Money::new(dec!(4), foo()));
        assert_eq!(money.clone() + 5, Money::new(dec!(6), foo()));
        assert_eq!(-2 + money, Money::new(dec!(-1), foo()));

        let mut money = Money::new(dec!(0), bar());
        money += dec!(1);
        assert_eq!(money, Money::new(dec!(1), bar()));
        money += -5;
        assert_eq!(money, Money::new(dec!(-4), bar()));
    }

    #[test]
    fn test_subtract_decimal_and_integer() {
        let money = Money::new(dec!(1), foo());

        assert_eq!(money.clone() - dec!(5), Money::new(dec!(-4), foo()));
        assert_eq!(dec!(3) - money.clone(), Money::new(dec!(2), foo()));
        assert_eq!(money.clone() - -1, Money::new(dec!(2), foo()));
        assert_eq!(-2 - money, Money::new(dec!(-3), foo()));

        let mut money = Money::new(dec!(0), bar());
        money -= dec!(1);
        assert_eq!(money, Money::new(dec!(-1), bar()));
        money -= -5;
        assert_eq!(money, Money::new(dec!(4), bar()));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let mut money = Money::new(dec!(2), foo());

        money = money * dec!(-3);
        assert_eq!(money, Money::new(dec!(-6), foo()));
        money = dec!(2) * money;
        assert_eq!(money, Money::new(dec!(-12), foo()));
        money *= dec!(-5);
        assert_eq!(money, Money::new(dec!(60), foo()));

        money = money * 2;
        assert_eq!(money, Money::new(dec!(120), foo()));
        money = -1 * money;
        assert_eq!(money, Money::new(dec!(-120), foo()));
        money *= 3;
        assert_eq!(money, Money::new(dec!(-360), foo()));
    }

    #[test]
    fn test_divide_by_scalar() {
        let mut money = Money::new(dec!(360), foo());

        money = money / dec!(2);
        assert_eq!(money, Money::new(dec!(180), foo()));
        money = dec!(-43200) / money;
        assert_eq!(money, Money::new(dec!(-240), foo()));
        money /= dec!(-2);
        assert_eq!(money, Money::new(dec!(120), foo()));

        money = money / -5;
        assert_eq!(money, Money::new(dec!(-24), foo()));
        money = 72 / money;
        assert_eq!(money, Money::new(dec!(-3), foo()));
        money /= -3;
        assert_eq!(money, Money::new(dec!(1), foo()));
    }

    #[test]
    #[should_panic]
    fn test_divide_by_zero_panics() {
        let _ = Money::new(dec!(1), foo()) / 0;
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_add_overflow_panics() {
        let _ = Money::new(Decimal::MAX, foo()) + dec!(1);
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_multiply_overflow_panics() {
        let _ = Money::new(Decimal::MAX, foo()) * 2;
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Money::new(dec!(5), foo()), Money::new(dec!(-5), foo()));
        assert_eq!(-Money::new(dec!(-2.5), bar()), Money::new(dec!(2.5), bar()));
    }

    #[test]
    fn test_adding_same_currency_yields_aggregate() {
        let sum: AggregatedMoney = Money::new(dec!(1), foo()) + Money::new(dec!(1.5), foo());
        assert_eq!(sum, AggregatedMoney::with_amount(dec!(2.5), foo()));
        assert_eq!(sum.len(), 1);
    }

    #[test]
    fn test_adding_different_currencies_yields_aggregate() {
        let sum = Money::new(dec!(1), foo()) + Money::new(dec!(1.5), bar());
        assert_eq!(
            sum,
            AggregatedMoney::from_money([
                Money::new(dec!(1), foo()),
                Money::new(dec!(1.5), bar()),
            ])
        );
    }

    #[test]
    fn test_subtracting_money_yields_aggregate() {
        let same = Money::new(dec!(1), foo()) - Money::new(dec!(1.5), foo());
        assert_eq!(same, AggregatedMoney::with_amount(dec!(-0.5), foo()));

        let different = Money::new(dec!(1), foo()) - Money::new(dec!(1.5), bar());
        assert_eq!(
            different,
            AggregatedMoney::from_money([
                Money::new(dec!(1), foo()),
                Money::new(dec!(-1.5), bar()),
            ])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(2.50), Currency::usd()).to_string(), "2.50 USD");
        assert_eq!(Money::new(dec!(-3), foo()).to_string(), "-3 foo");
    }

    #[test]
    fn test_serde_roundtrip() {
        let money = Money::new(dec!(12.345), baz());
        let json = serde_json::to_string(&money).unwrap();
        let decoded: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, money);
    }
}
