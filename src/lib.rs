//! Money Rates Core - exchange-rate lookup and currency conversion.
//!
//! This crate contains the conversion core: it resolves the configured rate
//! source, looks up rates for a currency pair, converts amounts with
//! decimal-safe rounding, and computes median rates across observations.
//! It is storage-agnostic and defines traits that rate stores and rate
//! backends implement.

pub mod backends;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod settings;
pub mod storage;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the domain surface
pub use backends::StaticBackend;
pub use fx::{
    median, Amount, FxError, FxService, FxServiceTrait, Rate, RateBackend, RateSource,
    RateStoreTrait,
};
pub use settings::Settings;
pub use storage::InMemoryRateStore;
