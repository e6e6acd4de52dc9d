//! Thread-safe registry of ISO 4217 currencies.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};
use tracing::debug;

use crate::iso4217::Iso4217Currency;

/// Lookup key: a currency is reachable by either of its codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CodeKey {
    Alphabetic(String),
    Numeric(String),
}

/// Lookup table from ISO 4217 codes to currencies.
///
/// A single lock guards every read and write. Both codes of a registered
/// currency point at the same entry, and registering never leaves an
/// orphaned code behind.
#[derive(Debug, Default)]
pub struct Iso4217Registry {
    entries: Mutex<HashMap<CodeKey, Arc<Iso4217Currency>>>,
}

static GLOBAL: OnceLock<Iso4217Registry> = OnceLock::new();

impl Iso4217Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in catalog.
    pub fn with_predefined() -> Self {
        let registry = Self::new();
        for currency in Iso4217Currency::predefined_currencies() {
            registry.register(currency.clone());
        }
        registry
    }

    /// The process-wide registry, seeded with the built-in catalog on
    /// first use.
    pub fn global() -> &'static Iso4217Registry {
        GLOBAL.get_or_init(Self::with_predefined)
    }

    /// Register a currency under both of its codes.
    ///
    /// A currency registered with the same codes is replaced. If either
    /// code currently belongs to a currency with a different counterpart
    /// code, that other currency is removed entirely.
    pub fn register(&self, currency: Iso4217Currency) {
        let mut entries = self.entries.lock();

        let numeric = CodeKey::Numeric(currency.numeric_code().to_string());
        let alphabetic = CodeKey::Alphabetic(currency.alphabetic_code().to_string());

        if let Some(existing) = entries.get(&numeric).cloned() {
            if existing.alphabetic_code() != currency.alphabetic_code() {
                entries.remove(&CodeKey::Alphabetic(existing.alphabetic_code().to_string()));
            }
        }

        if let Some(existing) = entries.get(&alphabetic).cloned() {
            if existing.numeric_code() != currency.numeric_code() {
                entries.remove(&CodeKey::Numeric(existing.numeric_code().to_string()));
            }
        }

        debug!(
            alphabetic_code = currency.alphabetic_code(),
            numeric_code = currency.numeric_code(),
            minor_units = currency.minor_units(),
            "Registered currency"
        );

        let currency = Arc::new(currency);
        entries.insert(numeric, Arc::clone(&currency));
        entries.insert(alphabetic, currency);
    }

    /// Remove both codes of the given currency.
    pub fn unregister(&self, currency: &Iso4217Currency) {
        let mut entries = self.entries.lock();
        entries.remove(&CodeKey::Numeric(currency.numeric_code().to_string()));
        entries.remove(&CodeKey::Alphabetic(currency.alphabetic_code().to_string()));

        debug!(
            alphabetic_code = currency.alphabetic_code(),
            numeric_code = currency.numeric_code(),
            "Unregistered currency"
        );
    }

    /// Get the currency registered under an alphabetic code.
    pub fn by_alphabetic_code(&self, code: &str) -> Option<Iso4217Currency> {
        self.lookup(&CodeKey::Alphabetic(code.to_string()))
    }

    /// Get the currency registered under a numeric code.
    pub fn by_numeric_code(&self, code: &str) -> Option<Iso4217Currency> {
        self.lookup(&CodeKey::Numeric(code.to_string()))
    }

    /// All currently registered currencies.
    pub fn currencies(&self) -> HashSet<Iso4217Currency> {
        self.entries
            .lock()
            .values()
            .map(|currency| currency.as_ref().clone())
            .collect()
    }

    fn lookup(&self, key: &CodeKey) -> Option<Iso4217Currency> {
        self.entries
            .lock()
            .get(key)
            .map(|currency| currency.as_ref().clone())
    }
}
