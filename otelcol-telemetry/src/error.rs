//! Error types for telemetry level resolution and settings access.

use thiserror::Error;

/// Errors raised while resolving or reading telemetry settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    /// The raw metrics level did not match any known level.
    ///
    /// Carries the case-folded value exactly as it was matched.
    #[error("unknown metrics level {0:?}")]
    UnrecognizedLevel(String),

    /// Settings were read before being installed.
    #[error("telemetry settings have not been initialized")]
    Uninitialized,

    /// Settings were installed twice.
    #[error("telemetry settings are already initialized")]
    AlreadyInitialized,

    /// The global logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
