//! # otelcol Configuration System
//!
//! Layered configuration for the collector's self-telemetry and receivers.
//!
//! ## Features
//! - **Layered Sources**: defaults, YAML file, `OTELCOL_*` environment, command line
//! - **Validation**: every loaded value is checked before it is handed out
//! - **Write-Once Settings**: [`SettingsSlot`] guards reads before initialization

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{providers::Serialized, Figment};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod provider;
mod receiver;
mod serde_helpers;
mod slot;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use provider::{ConfigProvider, EnvVars, NoOverrides, YamlFile, ENV_PREFIX};
pub use receiver::{
    ProtocolServerSettings, ReceiverSettings, ReceiversConfig, TlsCredentials,
    ZipkinReceiverConfig, ZIPKIN_DEFAULT_ENDPOINT,
};
pub use slot::SettingsSlot;
pub use telemetry::{
    default_metrics_address, TelemetrySettings, DEFAULT_METRICS_PORT, DEFAULT_METRICS_PREFIX,
};

/// Configuration file read when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config/otelcol.yaml";

const ZIPKIN_KEY: &str = "receivers.zipkin";

/// Top‑level collector configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Self-telemetry settings.
    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetrySettings,

    /// Receivers to run.
    #[validate(nested)]
    #[serde(default)]
    pub receivers: ReceiversConfig,
}

impl CollectorConfig {
    /// Load the configuration.
    ///
    /// Hierarchy, later layers winning:
    /// 1. Default values
    /// 2. `file`, or [`DEFAULT_CONFIG_PATH`] if present
    /// 3. `OTELCOL_*` environment variables
    /// 4. `overrides` (command-line flags)
    pub fn load(file: Option<&Path>, overrides: &dyn ConfigProvider) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => YamlFile::required(path),
            None => YamlFile::optional(DEFAULT_CONFIG_PATH),
        };

        let figment = Figment::from(Serialized::defaults(CollectorConfig::default()))
            .merge(file.load()?)
            .merge(EnvVars.load()?)
            .merge(overrides.load()?);

        Self::from_figment(figment)
    }

    /// Extract and validate a configuration from an assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let zipkin_is_section = figment
            .find_value(ZIPKIN_KEY)
            .map_or(false, |value| value.as_dict().is_some());
        let figment = if zipkin_is_section {
            figment.join(Serialized::default(ZIPKIN_KEY, ZipkinReceiverConfig::default()))
        } else {
            figment
        };

        figment
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
