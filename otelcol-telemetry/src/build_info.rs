//! Build-type detection.
//!
//! The build type is fixed at compile time through `OTELCOL_BUILD_TYPE`.
//! Builds that do not set it are release builds.

/// Value of `OTELCOL_BUILD_TYPE` marking a release build.
pub const RELEASE: &str = "release";

/// Value of `OTELCOL_BUILD_TYPE` marking a development build.
pub const DEV: &str = "dev";

/// Whether the running binary is a local development build or a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Development,
    Release,
}

impl BuildType {
    /// Classifies a build-type marker. Anything other than `release` is a
    /// development build.
    pub fn from_marker(marker: &str) -> Self {
        if marker == RELEASE {
            BuildType::Release
        } else {
            BuildType::Development
        }
    }

    /// Build type of this binary.
    pub fn current() -> Self {
        Self::from_marker(option_env!("OTELCOL_BUILD_TYPE").unwrap_or(RELEASE))
    }

    pub fn is_dev(self) -> bool {
        self == BuildType::Development
    }
}
