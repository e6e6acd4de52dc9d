//! Rounding modes for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How to round an amount to a given number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero.
    Plain,
    /// Round toward negative infinity.
    Down,
    /// Round toward positive infinity.
    Up,
    /// Round half to even.
    #[default]
    Bankers,
}

impl RoundingMode {
    /// Get the equivalent decimal rounding strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Plain => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Up => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Bankers => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round `value` to `scale` decimal places.
    pub fn round(self, value: Decimal, scale: u32) -> Decimal {
        value.round_dp_with_strategy(scale, self.strategy())
    }
}
