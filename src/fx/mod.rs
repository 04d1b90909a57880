//! FX (Foreign Exchange) module - domain models, conversion service, and traits.
//!
//! - [`fx_model`] - Rate sources, rates, and conversion amounts
//! - [`fx_errors`] - FX-specific error types
//! - [`fx_traits`] - Store, backend, and service contracts
//! - [`fx_service`] - Source resolution, rate lookup, and conversion
//! - [`median`] - Median rate over sorted observations

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
pub mod median;


pub use fx_errors::FxError;
pub use fx_model::{Amount, Rate, RateSource};
pub use fx_service::FxService;
pub use fx_traits::{FxServiceTrait, RateBackend, RateStoreTrait};
pub use median::median;
