use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use figment::{providers::Serialized, Figment};
use otelcol_config::{CollectorConfig, ConfigError, ConfigProvider, SettingsSlot};
use otelcol_telemetry::{logging::DEFAULT_DIRECTIVE, InstanceId, Level};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "otelcol", version, about)]
pub struct Cli {
    /// Configuration file (defaults to config/otelcol.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive; RUST_LOG takes precedence
    #[arg(long, global = true, default_value = DEFAULT_DIRECTIVE)]
    pub log_level: String,

    #[command(flatten)]
    pub telemetry: TelemetryArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve and validate the configuration, then print the result
    Check,
    /// Print the default configuration for this build
    Defaults,
}

/// Command-line flags that control publication of telemetry data.
///
/// Unset flags leave the file and environment values in place.
#[derive(Args, Debug, Clone, Default, Serialize)]
pub struct TelemetryArgs {
    /// Output level of telemetry metrics (NONE, BASIC, NORMAL, DETAILED) [default: BASIC]
    #[arg(long, global = true, value_name = "LEVEL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_level: Option<String>,

    /// [address]:port for exposing collector telemetry [default: localhost:8888 on dev builds, :8888 otherwise]
    #[arg(long, global = true, value_name = "ADDR")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_addr: Option<String>,

    /// Prefix to the metrics generated by the collector [default: otelcol]
    #[arg(long, global = true, value_name = "PREFIX")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_prefix: Option<String>,

    /// Use legacy metrics [default: false]
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_metrics: Option<bool>,

    /// Use new metrics [default: true]
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_metrics: Option<bool>,

    /// Add 'service.instance.id' to the collector metrics [default: true]
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_instance_id: Option<bool>,
}

impl ConfigProvider for TelemetryArgs {
    fn load(&self) -> Result<Figment, ConfigError> {
        Ok(Figment::from(Serialized::default("telemetry", self)))
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_instance_id: Option<String>,
    config: &'a CollectorConfig,
}

pub fn run_command(cli: &Cli) -> anyhow::Result<String> {
    match cli.command {
        Commands::Check => check(cli),
        Commands::Defaults => Ok(serde_yaml::to_string(&CollectorConfig::default())?),
    }
}

fn check(cli: &Cli) -> anyhow::Result<String> {
    let config = CollectorConfig::load(cli.config.as_deref(), &cli.telemetry)?;
    info!("Configuration loaded");

    let slot = SettingsSlot::new();
    let settings = slot.install(config.telemetry.clone())?;
    let level = settings.log_summary()?;

    if let Some(zipkin) = &config.receivers.zipkin {
        info!(
            name = %zipkin.receiver.name,
            endpoint = %zipkin.endpoint(),
            tls = zipkin.is_tls(),
            "Zipkin receiver configured"
        );
    }

    let instance = InstanceId::generate();
    let report = Report {
        level,
        service_instance_id: settings.instance_attribute(&instance).map(|(_, id)| id),
        config: &config,
    };
    Ok(serde_yaml::to_string(&report)?)
}
