//! Currencies: units of account identified by a code and a number of
//! fraction digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::MoneyError;
use crate::iso4217::Iso4217Currency;

/// A unit of account.
///
/// Two currencies are the same currency when they are the same variant and
/// their ids match. An ISO currency and a custom currency are never equal,
/// even when they share the same textual id. Everything else a variant
/// carries (names, numeric codes, minor units) is ignored by equality and
/// hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Currency {
    /// A currency from the ISO 4217 catalog (or registered alongside it).
    Iso(Iso4217Currency),
    /// An application-defined unit of account.
    Custom(CustomCurrency),
}

impl Currency {
    /// Create a custom currency.
    pub fn custom(id: impl Into<String>, minor_units: u32) -> Self {
        Currency::Custom(CustomCurrency::new(id, minor_units))
    }

    /// The identity of the currency.
    pub fn id(&self) -> &str {
        match self {
            Currency::Iso(iso) => iso.alphabetic_code(),
            Currency::Custom(custom) => &custom.id,
        }
    }

    /// Number of decimal places used to express minor units.
    pub fn minor_units(&self) -> u32 {
        match self {
            Currency::Iso(iso) => iso.minor_units(),
            Currency::Custom(custom) => custom.minor_units,
        }
    }

    /// Whether `other` denotes the same currency as `self`.
    pub fn is_same_currency(&self, other: &Currency) -> bool {
        self == other
    }

    /// The ISO 4217 data, if this is a catalog currency.
    pub fn as_iso(&self) -> Option<&Iso4217Currency> {
        match self {
            Currency::Iso(iso) => Some(iso),
            Currency::Custom(_) => None,
        }
    }

    /// Common currencies
    pub fn usd() -> Self {
        Currency::Iso(Iso4217Currency::USD)
    }

    pub fn eur() -> Self {
        Currency::Iso(Iso4217Currency::EUR)
    }

    pub fn gbp() -> Self {
        Currency::Iso(Iso4217Currency::GBP)
    }

    pub fn jpy() -> Self {
        Currency::Iso(Iso4217Currency::JPY)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Currency::Iso(lhs), Currency::Iso(rhs)) => {
                lhs.alphabetic_code() == rhs.alphabetic_code()
            }
            (Currency::Custom(lhs), Currency::Custom(rhs)) => lhs.id == rhs.id,
            _ => false,
        }
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        self.id().hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Resolve an ISO 4217 alphabetic code through the global registry.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Iso4217Currency::from_alphabetic_code(code)
            .map(Currency::Iso)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }
}

impl From<Iso4217Currency> for Currency {
    fn from(iso: Iso4217Currency) -> Self {
        Currency::Iso(iso)
    }
}

impl From<CustomCurrency> for Currency {
    fn from(custom: CustomCurrency) -> Self {
        Currency::Custom(custom)
    }
}

/// An application-defined currency, such as loyalty points or an
/// in-game unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomCurrency {
    /// Unique identifier among custom currencies.
    pub id: String,
    /// Number of decimal places used to express minor units.
    pub minor_units: u32,
}

impl CustomCurrency {
    pub fn new(id: impl Into<String>, minor_units: u32) -> Self {
        Self {
            id: id.into(),
            minor_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_different_variants_with_same_id_are_not_equal() {
        let iso = Currency::usd();
        let custom = Currency::custom("USD", 2);

        assert_eq!(iso.id(), custom.id());
        assert_ne!(iso, custom);
        assert!(!iso.is_same_currency(&custom));
        assert!(!custom.is_same_currency(&iso));
    }

    #[test]
    fn test_different_currencies_of_same_variant_are_not_equal() {
        assert_ne!(Currency::custom("foo", 0), Currency::custom("bar", 1));
        assert_ne!(Currency::usd(), Currency::eur());
    }

    #[test]
    fn test_same_currencies_are_equal() {
        assert_eq!(Currency::custom("foo", 0), Currency::custom("foo", 0));
        assert_eq!(Currency::gbp(), Currency::gbp());
    }

    #[test]
    fn test_equality_ignores_non_identity_fields() {
        let renamed = Iso4217Currency::new("USD", "999", 4, "Renamed Dollar").unwrap();
        assert_eq!(Currency::Iso(renamed), Currency::usd());
        assert_eq!(Currency::custom("pts", 0), Currency::custom("pts", 2));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Currency::custom("foo", 0));
        set.insert(Currency::custom("foo", 3));
        set.insert(Currency::custom("USD", 2));
        set.insert(Currency::usd());

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_from_str_uses_registry() {
        let currency: Currency = "JPY".parse().unwrap();
        assert_eq!(currency, Currency::jpy());
        assert_eq!(currency.minor_units(), 0);

        let err = "jpy".parse::<Currency>().unwrap_err();
        assert!(matches!(err, MoneyError::UnknownCurrency(code) if code == "jpy"));
    }

    #[test]
    fn test_display_and_accessors() {
        assert_eq!(Currency::eur().to_string(), "EUR");
        assert_eq!(Currency::custom("pts", 1).minor_units(), 1);
        assert!(Currency::custom("pts", 1).as_iso().is_none());
        assert_eq!(
            Currency::gbp().as_iso().map(|iso| iso.numeric_code()),
            Some("826")
        );
    }

    #[test]
    fn test_serde_roundtrip_keeps_variant() {
        let custom = Currency::custom("USD", 2);
        let json = serde_json::to_string(&custom).unwrap();
        let decoded: Currency = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, custom);
        assert_ne!(decoded, Currency::usd());
    }

    #[test]
    fn test_deserialize_rejects_invalid_iso_code() {
        let json = r#"{"kind":"iso","alphabetic_code":"NOTACODE","numeric_code":"1","minor_units":2,"name":"Bad"}"#;
        assert!(serde_json::from_str::<Currency>(json).is_err());

        let money = r#"{"amount":"1","currency":{"kind":"iso","alphabetic_code":"US","numeric_code":"840","minor_units":2,"name":"Bad"}}"#;
        assert!(serde_json::from_str::<crate::Money>(money).is_err());
    }
}
