//! # otelcol Telemetry
//!
//! Telemetry levels, build-type detection, instance identifiers and logging
//! for the collector's own instrumentation.

pub mod build_info;
pub mod error;
pub mod instance;
pub mod level;
pub mod logging;

pub use build_info::BuildType;
pub use error::TelemetryError;
pub use instance::{InstanceId, INSTANCE_ID_KEY};
pub use level::Level;
pub use logging::EventLogger;
