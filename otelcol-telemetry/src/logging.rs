//! ## otelcol-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! The collector logs through `tracing`; this module installs the global
//! `fmt` subscriber. `RUST_LOG` takes precedence over the configured
//! default directive.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

use crate::TelemetryError;

/// Default directive when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Debug, Clone, Copy)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber.
    ///
    /// Fails instead of panicking when a subscriber is already installed.
    pub fn init(default_directive: &str) -> Result<(), TelemetryError> {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = Self::filter(env.as_deref(), default_directive)?;

        fmt()
            .with_env_filter(filter)
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| TelemetryError::Logging(e.to_string()))
    }

    /// Builds the filter from an optional `RUST_LOG` value and a fallback.
    pub fn filter(env: Option<&str>, default_directive: &str) -> Result<EnvFilter, TelemetryError> {
        let directive = match env {
            Some(value) if !value.trim().is_empty() => value,
            _ => default_directive,
        };
        EnvFilter::try_new(directive).map_err(|e| TelemetryError::Logging(e.to_string()))
    }
}
