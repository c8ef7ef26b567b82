//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }

    /// Install the global tracing subscriber.
    ///
    /// Returns `Ok(false)` when a subscriber was already installed.
    pub fn init(&self) -> Result<bool, ValidationError> {
        let builder = tracing_subscriber::fmt().with_env_filter(self.env_filter()?);
        let installed = if self.json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };
        Ok(installed)
    }

    fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.filter).map_err(|e| ValidationError::InvalidLogFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info,quiz_question=debug".to_string()
}
