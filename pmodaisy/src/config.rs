//! Client configuration
//!
//! A DAISY Online client is configured by a small YAML document:
//!
//! ```yaml
//! service_url: https://daisy.example.org/service
//! timeout_secs: 30
//! user_agent: MyReader/1.0
//! ```
//!
//! Only `service_url` is required. An absent or zero `timeout_secs` disables
//! the request timeout.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaisyConfig {
    /// Endpoint of the DAISY Online service
    pub service_url: String,

    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent sent with each request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl DaisyConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Default::default()
        }
    }

    /// Parse a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid configuration: {}", e)))?;
        if config.service_url.trim().is_empty() {
            return Err(Error::config("missing service_url"));
        }
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading DAISY Online configuration from {}", path.display());
        let yaml = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::config(format!("cannot serialize configuration: {}", e)))
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
