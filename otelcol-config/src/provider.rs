//! Configuration provider trait for loading collector configuration from various sources.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};

use crate::ConfigError;

/// Prefix of environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "OTELCOL_";

/// Trait for loading collector configuration from different sources.
pub trait ConfigProvider {
    /// Loads the configuration and returns a Figment instance.
    fn load(&self) -> Result<Figment, ConfigError>;
}

/// A YAML configuration file.
#[derive(Debug, Clone)]
pub struct YamlFile {
    path: PathBuf,
    required: bool,
}

impl YamlFile {
    /// A file the operator asked for explicitly; it must exist.
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// A conventional location that is skipped when absent.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigProvider for YamlFile {
    fn load(&self) -> Result<Figment, ConfigError> {
        if self.path.exists() {
            tracing::info!(path = %self.path.display(), "Reading configuration file");
            Ok(Figment::from(Yaml::file(&self.path)))
        } else if self.required {
            Err(ConfigError::FileNotFound(self.path.clone()))
        } else {
            tracing::debug!(path = %self.path.display(), "config file not found, skipping");
            Ok(Figment::new())
        }
    }
}

/// `OTELCOL_*` environment variables, nested on `__`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVars;

impl ConfigProvider for EnvVars {
    fn load(&self) -> Result<Figment, ConfigError> {
        Ok(Figment::from(Env::prefixed(ENV_PREFIX).split("__")))
    }
}

/// No additional configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl ConfigProvider for NoOverrides {
    fn load(&self) -> Result<Figment, ConfigError> {
        Ok(Figment::new())
    }
}
