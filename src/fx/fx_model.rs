use crate::constants::{AMOUNT_INPUT_SCALE, DEFAULT_BASE_CURRENCY};
use crate::fx::fx_errors::FxError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A named provider of exchange-rate data.
///
/// All of a source's rates are expressed relative to its base currency,
/// whose own rate is implicitly 1. The name is unique across sources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateSource {
    pub name: String,
    pub base_currency: String,
}

impl RateSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
        }
    }

    pub fn with_base_currency(mut self, base_currency: impl Into<String>) -> Self {
        self.base_currency = base_currency.into();
        self
    }
}

/// A single exchange rate: one unit of the source's base currency expressed
/// in `currency`. The `(source_name, currency)` pair is unique.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub source_name: String,
    pub currency: String,
    #[serde(serialize_with = "serialize_decimal_6")]
    pub value: Decimal,
}

impl Rate {
    pub fn new(
        source_name: impl Into<String>,
        currency: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            currency: currency.into(),
            value,
        }
    }
}

fn serialize_decimal_6<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rounded = decimal.round_dp(6);
    serializer.serialize_str(&rounded.to_string())
}

/// A monetary amount accepted by the converter.
///
/// Callers either hold an exact decimal or a binary floating-point
/// approximation; the two are normalized differently before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Exact(Decimal),
    Approximate(f64),
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Approximate(value)
    }
}

impl Amount {
    /// Returns the exact decimal value of this amount.
    ///
    /// An exact amount passes through untouched. A floating-point amount is
    /// converted to its nearest decimal representation and rounded to 6
    /// fractional digits with banker's rounding (MidpointNearestEven), so
    /// binary noise below that scale never reaches the conversion math.
    /// Non-finite floats are rejected.
    pub fn normalized(self) -> Result<Decimal, FxError> {
        match self {
            Amount::Exact(value) => Ok(value),
            Amount::Approximate(value) => Decimal::from_f64_retain(value)
                .map(|d| {
                    d.round_dp_with_strategy(
                        AMOUNT_INPUT_SCALE,
                        RoundingStrategy::MidpointNearestEven,
                    )
                })
                .ok_or_else(|| {
                    FxError::InvalidAmount(format!("{} is not representable as a decimal", value))
                }),
        }
    }
}
