//! Configuration structures.
//!
//! Configuration is loaded from environment variables or a JSON config file.
//! Every field has a default, so an empty file or environment is valid.

use crate::types::{Error, Result};
use crate::validation::{validate_non_empty, validate_one_of};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `ObservabilityConfig::log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Global bridge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Event sink configuration.
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error, off).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Event sink configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Source tag stamped on every envelope the channel sink emits.
    pub source: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            source: "ar_engine".to_string(),
        }
    }
}

impl Config {
    /// Build a config from defaults overridden by `AR_BRIDGE_*` variables.
    ///
    /// - `AR_BRIDGE_LOG_LEVEL`: tracing level
    /// - `AR_BRIDGE_LOG_FORMAT`: `json` enables JSON logs
    /// - `AR_BRIDGE_EVENT_SOURCE`: envelope source tag
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load a JSON config file. Missing sections fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.observability.log_level, "observability.log_level")?;
        validate_one_of(
            &self.observability.log_level,
            LOG_LEVELS,
            "observability.log_level",
        )?;
        validate_non_empty(&self.sink.source, "sink.source")?;
        Ok(())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(level) = lookup("AR_BRIDGE_LOG_LEVEL") {
            config.observability.log_level = level.to_ascii_lowercase();
        }
        if let Some(format) = lookup("AR_BRIDGE_LOG_FORMAT") {
            config.observability.json_logs = match format.to_ascii_lowercase().as_str() {
                "json" => true,
                "text" | "compact" => false,
                other => {
                    return Err(Error::validation(format!(
                        "AR_BRIDGE_LOG_FORMAT must be json or text, got {:?}",
                        other
                    )))
                }
            };
        }
        if let Some(source) = lookup("AR_BRIDGE_EVENT_SOURCE") {
            config.sink.source = source;
        }

        config.validate()?;
        Ok(config)
    }
}
