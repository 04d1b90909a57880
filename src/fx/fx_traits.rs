use super::fx_model::{Amount, Rate, RateSource};
use crate::errors::Result;
use rust_decimal::Decimal;

/// Read contract for the rate store.
///
/// The store is populated by an external update job; the core only reads.
/// Queries are idempotent and safe to call concurrently.
pub trait RateStoreTrait: Send + Sync {
    /// Look up a rate source by its unique name.
    fn get_source_by_name(&self, name: &str) -> Result<Option<RateSource>>;

    /// Look up the rate row for a `(source, currency)` pair.
    fn get_rate(&self, source_name: &str, currency: &str) -> Result<Option<Rate>>;

    /// All rate values recorded for `currency` across sources, sorted
    /// ascending by value.
    fn list_rates_for_currency(&self, currency: &str) -> Result<Vec<Decimal>>;
}

/// Capability exposed by every concrete rate backend: the name of the rate
/// source it publishes into the store. Never empty.
pub trait RateBackend: Send + Sync {
    fn source_name(&self) -> &str;
}

/// Contract for the conversion service operations.
pub trait FxServiceTrait: Send + Sync {
    /// Resolves the rate source declared by the configured backend.
    fn resolve_active_source(&self) -> Result<RateSource>;

    /// Returns the rate from `source`'s base currency to `currency`.
    fn get_rate(&self, currency: &str, source: &RateSource) -> Result<Decimal>;

    /// Converts `amount` from `currency_from` to `currency_to` using the
    /// active source, rounded to two fractional digits.
    fn convert(&self, amount: Amount, currency_from: &str, currency_to: &str) -> Result<Decimal>;

    /// Median of all recorded rates for `currency` across sources.
    fn get_median_rate(&self, currency: &str) -> Result<Decimal>;
}
