// otelcol-config/src/validation.rs
//! Custom validation functions for configuration.
//!
//! Provides shared validation logic used across multiple configuration modules.

use std::borrow::Cow;

use lazy_static::lazy_static;
use otelcol_telemetry::Level;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref METRICS_PREFIX: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Validate a `[host]:port` endpoint. The host may be empty to bind every
/// interface; bracketed IPv6 hosts are accepted.
pub fn validate_endpoint(endpoint: &str) -> Result<(), ValidationError> {
    let Some((host, port)) = endpoint.rsplit_once(':') else {
        return Err(with_message("invalid_endpoint", "expected [host]:port"));
    };

    if port.parse::<u16>().is_err() {
        return Err(with_message("invalid_port", "port must be a number in 0-65535"));
    }

    if host.chars().any(char::is_whitespace) {
        return Err(with_message("invalid_host", "host must not contain whitespace"));
    }

    Ok(())
}

/// Validate that the raw metrics level resolves to a known level.
pub fn validate_metrics_level(raw: &str) -> Result<(), ValidationError> {
    Level::resolve(raw)
        .map(|_| ())
        .map_err(|e| with_message("invalid_metrics_level", e.to_string()))
}

/// Validate that the metrics prefix is a usable metric name identifier.
pub fn validate_metrics_prefix(prefix: &str) -> Result<(), ValidationError> {
    if METRICS_PREFIX.is_match(prefix) {
        Ok(())
    } else {
        Err(with_message(
            "invalid_metrics_prefix",
            "prefix must start with a letter or '_' and contain only letters, digits and '_'",
        ))
    }
}

/// Validate that a string is not empty or whitespace.
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

fn with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}
