use super::fx_errors::FxError;
use super::fx_model::{Amount, RateSource};
use super::fx_traits::{FxServiceTrait, RateBackend, RateStoreTrait};
use super::median::median;
use crate::constants::AMOUNT_OUTPUT_SCALE;
use crate::errors::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

/// Conversion service: resolves the active rate source and converts amounts
/// between currencies using its rates.
///
/// The service is a pure reader over the store. The configured backend is
/// consulted on every call, so swapping backends between calls takes effect
/// immediately; nothing is cached.
#[derive(Clone)]
pub struct FxService {
    store: Arc<dyn RateStoreTrait>,
    backend: Arc<dyn RateBackend>,
}

impl FxService {
    pub fn new(store: Arc<dyn RateStoreTrait>, backend: Arc<dyn RateBackend>) -> Self {
        Self { store, backend }
    }
}

impl FxServiceTrait for FxService {
    fn resolve_active_source(&self) -> Result<RateSource> {
        let name = self.backend.source_name();
        match self.store.get_source_by_name(name)? {
            Some(source) => {
                log::debug!(
                    "resolved active rate source '{}' (base {})",
                    source.name,
                    source.base_currency
                );
                Ok(source)
            }
            None => Err(FxError::SourceNotConfigured(name.to_string()).into()),
        }
    }

    fn get_rate(&self, currency: &str, source: &RateSource) -> Result<Decimal> {
        if currency.is_empty() {
            return Err(FxError::InvalidCurrencyCode("empty currency code".to_string()).into());
        }

        match self.store.get_rate(&source.name, currency)? {
            Some(rate) => Ok(rate.value),
            None => Err(FxError::RateNotFound {
                currency: currency.to_string(),
                source_name: source.name.clone(),
            }
            .into()),
        }
    }

    fn convert(&self, amount: Amount, currency_from: &str, currency_to: &str) -> Result<Decimal> {
        if currency_from.is_empty() || currency_to.is_empty() {
            return Err(FxError::InvalidCurrencyCode("empty currency code".to_string()).into());
        }

        let source = self.resolve_active_source()?;

        // The base currency converts to itself at exactly 1, without a
        // store row. The shortcut applies to the "from" side only: a
        // missing base-currency row on the "to" side is a genuine gap.
        let rate_from = if currency_from == source.base_currency {
            Decimal::ONE
        } else {
            self.get_rate(currency_from, &source)?
        };

        let rate_to = self.get_rate(currency_to, &source)?;

        if rate_from.is_zero() {
            return Err(FxError::InvalidRate(format!(
                "rate for {} in {} is zero",
                currency_from, source.name
            ))
            .into());
        }

        let amount = amount.normalized()?;
        let result = (amount / rate_from) * rate_to;

        Ok(result.round_dp_with_strategy(
            AMOUNT_OUTPUT_SCALE,
            RoundingStrategy::MidpointNearestEven,
        ))
    }

    fn get_median_rate(&self, currency: &str) -> Result<Decimal> {
        if currency.is_empty() {
            return Err(FxError::InvalidCurrencyCode("empty currency code".to_string()).into());
        }

        let rates = self.store.list_rates_for_currency(currency)?;
        if rates.is_empty() {
            return Err(
                FxError::EmptyRates(format!("no rates recorded for {}", currency)).into(),
            );
        }

        Ok(median(&rates)?)
    }
}
