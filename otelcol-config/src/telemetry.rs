//! Collector self-telemetry configuration.
//!
//! Parameters controlling the metrics the collector publishes about itself:
//! - Verbosity level
//! - Exporter bind address and metric name prefix
//! - Legacy/new metric toggles and instance tagging

use otelcol_telemetry::{BuildType, InstanceId, Level, TelemetryError, INSTANCE_ID_KEY};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::{self, Validate};

use crate::{serde_helpers, validation};

/// Port the metrics exporter listens on unless configured otherwise.
pub const DEFAULT_METRICS_PORT: u16 = 8888;

/// Default metric name prefix.
pub const DEFAULT_METRICS_PREFIX: &str = "otelcol";

/// Default bind address for the metrics exporter.
///
/// Development builds listen on localhost to avoid firewall prompts;
/// release builds listen on every interface.
pub fn default_metrics_address(is_dev_build: bool) -> String {
    if is_dev_build {
        format!("localhost:{DEFAULT_METRICS_PORT}")
    } else {
        format!(":{DEFAULT_METRICS_PORT}")
    }
}

/// Telemetry configuration.
///
/// Immutable once built; read it through the accessors.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct TelemetrySettings {
    /// Raw output level of telemetry metrics (NONE, BASIC, NORMAL, DETAILED).
    #[validate(custom(function = validation::validate_metrics_level))]
    #[serde(default = "default_metrics_level", deserialize_with = "serde_helpers::scalar_string")]
    metrics_level: String,

    /// `[address]:port` for exposing collector telemetry.
    #[validate(custom(function = validation::validate_endpoint))]
    #[serde(default = "default_metrics_addr", deserialize_with = "serde_helpers::scalar_string")]
    metrics_addr: String,

    /// Prefix to the metrics generated by the collector.
    #[validate(custom(function = validation::validate_metrics_prefix))]
    #[serde(default = "default_metrics_prefix", deserialize_with = "serde_helpers::scalar_string")]
    metrics_prefix: String,

    /// Emit the legacy metrics.
    #[serde(default)]
    legacy_metrics: bool,

    /// Emit the new metrics.
    #[serde(default = "default_true")]
    new_metrics: bool,

    /// Add `service.instance.id` to the collector metrics.
    #[serde(default = "default_true")]
    add_instance_id: bool,
}

fn default_metrics_level() -> String {
    Level::Basic.to_string()
}

fn default_metrics_addr() -> String {
    default_metrics_address(BuildType::current().is_dev())
}

fn default_metrics_prefix() -> String {
    DEFAULT_METRICS_PREFIX.into()
}

fn default_true() -> bool {
    true
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self::for_build(BuildType::current())
    }
}

impl TelemetrySettings {
    /// Defaults for the given build type.
    pub fn for_build(build: BuildType) -> Self {
        Self {
            metrics_level: default_metrics_level(),
            metrics_addr: default_metrics_address(build.is_dev()),
            metrics_prefix: default_metrics_prefix(),
            legacy_metrics: false,
            new_metrics: default_true(),
            add_instance_id: default_true(),
        }
    }

    pub fn with_metrics_level(mut self, raw: impl Into<String>) -> Self {
        self.metrics_level = raw.into();
        self
    }

    pub fn with_metrics_addr(mut self, addr: impl Into<String>) -> Self {
        self.metrics_addr = addr.into();
        self
    }

    pub fn with_metrics_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.metrics_prefix = prefix.into();
        self
    }

    pub fn with_metric_toggles(mut self, legacy: bool, new: bool) -> Self {
        self.legacy_metrics = legacy;
        self.new_metrics = new;
        self
    }

    pub fn with_add_instance_id(mut self, enabled: bool) -> Self {
        self.add_instance_id = enabled;
        self
    }

    /// Resolves the configured level.
    pub fn level(&self) -> Result<Level, TelemetryError> {
        Level::resolve(&self.metrics_level)
    }

    /// The level exactly as configured.
    pub fn raw_level(&self) -> &str {
        &self.metrics_level
    }

    pub fn metrics_address(&self) -> &str {
        &self.metrics_addr
    }

    pub fn metrics_prefix(&self) -> &str {
        &self.metrics_prefix
    }

    pub fn use_legacy_metrics(&self) -> bool {
        self.legacy_metrics
    }

    pub fn use_new_metrics(&self) -> bool {
        self.new_metrics
    }

    pub fn add_instance_id(&self) -> bool {
        self.add_instance_id
    }

    /// The `service.instance.id` attribute, if instance tagging is enabled.
    pub fn instance_attribute(&self, id: &InstanceId) -> Option<(&'static str, String)> {
        self.add_instance_id
            .then(|| (INSTANCE_ID_KEY, id.to_string()))
    }

    /// Logs the resolved settings as a single structured event.
    pub fn log_summary(&self) -> Result<Level, TelemetryError> {
        let level = self.level()?;
        info!(
            metrics_level = %level,
            metrics_addr = %self.metrics_addr,
            metrics_prefix = %self.metrics_prefix,
            legacy_metrics = self.legacy_metrics,
            new_metrics = self.new_metrics,
            add_instance_id = self.add_instance_id,
            "Telemetry settings resolved"
        );
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn metrics_address_depends_on_build() {
        assert_eq!(default_metrics_address(true), "localhost:8888");
        assert_eq!(default_metrics_address(false), ":8888");
    }

    #[test]
    fn plain_builds_bind_every_interface() {
        if option_env!("OTELCOL_BUILD_TYPE").is_none() {
            assert_eq!(TelemetrySettings::default().metrics_address(), ":8888");
        }
    }

    #[test]
    fn defaults_match_flags() {
        let settings = TelemetrySettings::for_build(BuildType::Release);
        assert_eq!(settings.raw_level(), "BASIC");
        assert_eq!(settings.level(), Ok(Level::Basic));
        assert_eq!(settings.metrics_address(), ":8888");
        assert_eq!(settings.metrics_prefix(), "otelcol");
        assert!(!settings.use_legacy_metrics());
        assert!(settings.use_new_metrics());
        assert!(settings.add_instance_id());
        settings.validate().expect("default settings should validate");

        let dev = TelemetrySettings::for_build(BuildType::Development);
        assert_eq!(dev.metrics_address(), "localhost:8888");
        dev.validate().expect("dev settings should validate");
    }

    #[test]
    fn accessors_are_stable() {
        let settings = TelemetrySettings::for_build(BuildType::Release)
            .with_metrics_level("Detailed")
            .with_metrics_addr("127.0.0.1:9999")
            .with_metrics_prefix("edge")
            .with_metric_toggles(true, false)
            .with_add_instance_id(false);

        for _ in 0..3 {
            assert_eq!(settings.level(), Ok(Level::Detailed));
            assert_eq!(settings.raw_level(), "Detailed");
            assert_eq!(settings.metrics_address(), "127.0.0.1:9999");
            assert_eq!(settings.metrics_prefix(), "edge");
            assert!(settings.use_legacy_metrics());
            assert!(!settings.use_new_metrics());
            assert!(!settings.add_instance_id());
        }
    }

    #[test]
    fn invalid_level_fails_validation_and_resolution() {
        let settings = TelemetrySettings::for_build(BuildType::Release).with_metrics_level("loud");
        assert!(settings.validate().is_err());
        assert_eq!(
            settings.level(),
            Err(TelemetryError::UnrecognizedLevel("loud".into()))
        );
    }

    #[test]
    fn invalid_addr_and_prefix_fail_validation() {
        let base = TelemetrySettings::for_build(BuildType::Release);
        assert!(base.clone().with_metrics_addr("8888").validate().is_err());
        assert!(base.with_metrics_prefix("").validate().is_err());
    }

    #[test]
    fn instance_attribute_follows_toggle() {
        let id = InstanceId::generate();
        let settings = TelemetrySettings::for_build(BuildType::Release);
        assert_eq!(
            settings.instance_attribute(&id),
            Some(("service.instance.id", id.to_string()))
        );
        let settings = settings.with_add_instance_id(false);
        assert_eq!(settings.instance_attribute(&id), None);
    }

    #[traced_test]
    #[test]
    fn summary_is_logged() {
        let settings = TelemetrySettings::for_build(BuildType::Release).with_metrics_level("normal");
        assert_eq!(settings.log_summary(), Ok(Level::Normal));
        assert!(logs_contain("Telemetry settings resolved"));
        assert!(logs_contain("metrics_level=NORMAL"));
        assert!(logs_contain("metrics_prefix=otelcol"));
    }
}
