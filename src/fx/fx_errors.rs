use thiserror::Error;

/// Errors raised by the conversion core.
///
/// The two not-found variants carry the identifying names so callers can
/// surface actionable messages; both indicate that the external rate update
/// job has not populated the store yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Rate source '{0}' does not exist. Run the rate update job to populate it")]
    SourceNotConfigured(String),

    #[error("Rate for {currency} in {source_name} does not exist. Run the rate update job to populate it")]
    RateNotFound {
        currency: String,
        source_name: String,
    },

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    #[error("No rate observations: {0}")]
    EmptyRates(String),
}
