//! Locale-aware formatting of monetary amounts.

use num_format::ToFormattedString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::rounding::RoundingMode;

pub use num_format::Locale;

/// When to put a sign in front of a formatted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignDisplay {
    /// Minus for negative amounts only.
    #[default]
    Automatic,
    /// Never show a sign.
    Never,
    /// Minus for negative amounts, plus for everything else, zero included.
    Always,
    /// Like `Always`, but zero is unsigned.
    ExceptZero,
}

/// How to render a [`Money`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    /// Fraction digits to show. Defaults to the currency's minor units.
    pub scale: Option<u32>,
    /// Rounding applied before formatting.
    pub rounding: RoundingMode,
    /// Sign placement.
    pub sign: SignDisplay,
}

impl MoneyFormat {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_sign(mut self, sign: SignDisplay) -> Self {
        self.sign = sign;
        self
    }
}

impl Money {
    /// Format the amount for `locale`, followed by the currency id.
    ///
    /// The amount is first rounded to `format.scale` (or the currency's
    /// minor units) with `format.rounding`, then shown with exactly that
    /// many fraction digits. The integer part is grouped and the decimal
    /// separator chosen according to the locale.
    pub fn localized_string(&self, locale: &Locale, format: &MoneyFormat) -> String {
        let scale = format
            .scale
            .unwrap_or_else(|| self.currency.minor_units())
            .min(Decimal::MAX_SCALE);
        let rounded = format.rounding.round(self.amount, scale);

        let mut magnitude = rounded.abs();
        magnitude.rescale(scale);
        let digits = magnitude.to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::with_capacity(digits.len() + 8);
        out.push_str(sign_prefix(format.sign, rounded, locale));
        match integer.parse::<u128>() {
            Ok(value) => out.push_str(&value.to_formatted_string(locale)),
            Err(_) => out.push_str(integer),
        }
        if !fraction.is_empty() {
            out.push_str(locale.decimal());
            out.push_str(fraction);
        }
        out.push(' ');
        out.push_str(self.currency.id());
        out
    }
}

fn sign_prefix(sign: SignDisplay, amount: Decimal, locale: &Locale) -> &'static str {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    match sign {
        SignDisplay::Never => "",
        _ if negative => locale.minus_sign(),
        SignDisplay::Automatic => "",
        SignDisplay::Always => "+",
        SignDisplay::ExceptZero if amount.is_zero() => "",
        SignDisplay::ExceptZero => "+",
    }
}
