//! Process-wide configuration for the conversion core.

use crate::backends::StaticBackend;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Default backend name used when none is configured.
pub const DEFAULT_ACTIVE_BACKEND: &str = "open-exchange-rates";

/// Configuration read at startup, identifying the active rate backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Name of the rate source the installed backend declares.
    pub active_backend: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_backend: DEFAULT_ACTIVE_BACKEND.to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the configured backend.
    pub fn backend(&self) -> StaticBackend {
        StaticBackend::new(self.active_backend.clone())
    }
}
