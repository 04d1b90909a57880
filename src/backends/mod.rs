//! Rate backend implementations.
//!
//! A backend declares which rate source it publishes into the store; the
//! fetching/update side lives outside this crate. The core only depends on
//! the [`RateBackend`] capability, never on a concrete backend type.

use crate::fx::RateBackend;

/// A backend with a fixed, configured source name.
///
/// This is the backend the [`crate::settings::Settings`] layer constructs;
/// update jobs with richer behavior implement [`RateBackend`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBackend {
    source_name: String,
}

impl StaticBackend {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }
}

impl RateBackend for StaticBackend {
    fn source_name(&self) -> &str {
        &self.source_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_backend_declares_its_name() {
        let backend = StaticBackend::new("open-exchange-rates");
        assert_eq!(backend.source_name(), "open-exchange-rates");
    }
}
