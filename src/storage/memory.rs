use crate::errors::{Error, Result};
use crate::fx::{Rate, RateSource, RateStoreTrait};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
struct StoreInner {
    /// Sources keyed by name; the key is the uniqueness guarantee.
    sources: HashMap<String, RateSource>,
    /// Rates keyed by `(source_name, currency)`.
    rates: HashMap<(String, String), Rate>,
}

/// In-memory rate store.
///
/// Reads satisfy [`RateStoreTrait`]; the write surface is what an external
/// update job needs to keep the store populated. Removing a source also
/// removes its rates, so a rate never outlives its source.
#[derive(Default)]
pub struct InMemoryRateStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a source, keyed by name.
    pub fn upsert_source(&self, source: RateSource) -> Result<()> {
        let mut inner = self.inner.write().map_err(|e| Error::Store(e.to_string()))?;
        inner.sources.insert(source.name.clone(), source);
        Ok(())
    }

    /// Inserts or replaces the rate for its `(source, currency)` pair.
    pub fn upsert_rate(&self, rate: Rate) -> Result<()> {
        let mut inner = self.inner.write().map_err(|e| Error::Store(e.to_string()))?;
        inner
            .rates
            .insert((rate.source_name.clone(), rate.currency.clone()), rate);
        Ok(())
    }

    /// Removes a source and every rate it owns.
    pub fn remove_source(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.write().map_err(|e| Error::Store(e.to_string()))?;
        inner.sources.remove(name);
        inner.rates.retain(|(source_name, _), _| source_name != name);
        Ok(())
    }
}

impl RateStoreTrait for InMemoryRateStore {
    fn get_source_by_name(&self, name: &str) -> Result<Option<RateSource>> {
        let inner = self.inner.read().map_err(|e| Error::Store(e.to_string()))?;
        Ok(inner.sources.get(name).cloned())
    }

    fn get_rate(&self, source_name: &str, currency: &str) -> Result<Option<Rate>> {
        let inner = self.inner.read().map_err(|e| Error::Store(e.to_string()))?;
        Ok(inner
            .rates
            .get(&(source_name.to_string(), currency.to_string()))
            .cloned())
    }

    fn list_rates_for_currency(&self, currency: &str) -> Result<Vec<Decimal>> {
        let inner = self.inner.read().map_err(|e| Error::Store(e.to_string()))?;
        let mut values: Vec<Decimal> = inner
            .rates
            .values()
            .filter(|rate| rate.currency == currency)
            .map(|rate| rate.value)
            .collect();
        values.sort();
        Ok(values)
    }
}
