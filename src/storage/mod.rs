//! Store implementations.
//!
//! The conversion core only sees [`crate::fx::RateStoreTrait`]; this module
//! ships the in-memory reference store used by tests and by embedders that
//! do not need durable storage.

mod memory;

pub use memory::InMemoryRateStore;
