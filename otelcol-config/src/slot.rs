//! Write-once holder for the resolved telemetry settings.
//!
//! Consumers that start before configuration is loaded share a
//! `SettingsSlot` instead of a global; reads before `install` fail with
//! [`TelemetryError::Uninitialized`].

use std::sync::Arc;

use once_cell::sync::OnceCell;
use otelcol_telemetry::{Level, TelemetryError};

use crate::TelemetrySettings;

#[derive(Debug, Default)]
pub struct SettingsSlot {
    cell: OnceCell<Arc<TelemetrySettings>>,
}

impl SettingsSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the settings. Only the first call succeeds.
    pub fn install(&self, settings: TelemetrySettings) -> Result<Arc<TelemetrySettings>, TelemetryError> {
        let settings = Arc::new(settings);
        self.cell
            .set(Arc::clone(&settings))
            .map_err(|_| TelemetryError::AlreadyInitialized)?;
        Ok(settings)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<&Arc<TelemetrySettings>, TelemetryError> {
        self.cell.get().ok_or(TelemetryError::Uninitialized)
    }

    pub fn level(&self) -> Result<Level, TelemetryError> {
        self.get()?.level()
    }

    pub fn metrics_address(&self) -> Result<&str, TelemetryError> {
        Ok(self.get()?.metrics_address())
    }

    pub fn metrics_prefix(&self) -> Result<&str, TelemetryError> {
        Ok(self.get()?.metrics_prefix())
    }

    pub fn use_legacy_metrics(&self) -> Result<bool, TelemetryError> {
        Ok(self.get()?.use_legacy_metrics())
    }

    pub fn use_new_metrics(&self) -> Result<bool, TelemetryError> {
        Ok(self.get()?.use_new_metrics())
    }

    pub fn add_instance_id(&self) -> Result<bool, TelemetryError> {
        Ok(self.get()?.add_instance_id())
    }
}
