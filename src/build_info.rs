//! Build information module
//!
//! Contains the compile-time constants forwarded by the build script and the
//! typed configuration the registry is built from.

use serde::{Deserialize, Serialize};

/// Build time in seconds since the Unix epoch, as injected text
pub const BUILD_TIME_UNIX: &str = match option_env!("BUILDINFO_BUILD_TIME_UNIX") {
    Some(s) => s,
    None => DEFAULT_BUILD_TIME_UNIX,
};

/// Source control revision the binary was built from
pub const BUILD_HASH: &str = match option_env!("BUILDINFO_BUILD_HASH") {
    Some(s) => s,
    None => DEFAULT_BUILD_HASH,
};

/// Release version assigned by CI
pub const RELEASE_VERSION: &str = match option_env!("BUILDINFO_RELEASE_VERSION") {
    Some(s) => s,
    None => DEFAULT_RELEASE_VERSION,
};

/// Link to the CI build record, empty when unknown
pub const BUILD_URL: &str = match option_env!("BUILDINFO_BUILD_URL") {
    Some(s) => s,
    None => DEFAULT_BUILD_URL,
};

/// Sentinel meaning "no build time provided"
pub const DEFAULT_BUILD_TIME_UNIX: &str = "0";
pub const DEFAULT_BUILD_HASH: &str = "dev";
pub const DEFAULT_RELEASE_VERSION: &str = "dev";
pub const DEFAULT_BUILD_URL: &str = "";

/// Build metadata supplied by the build pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Seconds since the epoch, parsed at initialization
    pub build_time_unix: String,
    pub build_hash: String,
    pub release_version: String,
    pub build_url: String,
}

impl BuildConfig {
    /// The values injected at compile time
    pub fn compiled() -> Self {
        Self {
            build_time_unix: BUILD_TIME_UNIX.to_string(),
            build_hash: BUILD_HASH.to_string(),
            release_version: RELEASE_VERSION.to_string(),
            build_url: BUILD_URL.to_string(),
        }
    }

    pub fn with_build_time_unix(mut self, value: impl Into<String>) -> Self {
        self.build_time_unix = value.into();
        self
    }

    pub fn with_build_hash(mut self, value: impl Into<String>) -> Self {
        self.build_hash = value.into();
        self
    }

    pub fn with_release_version(mut self, value: impl Into<String>) -> Self {
        self.release_version = value.into();
        self
    }

    pub fn with_build_url(mut self, value: impl Into<String>) -> Self {
        self.build_url = value.into();
        self
    }

    /// Whether the build time is the "not provided" sentinel
    pub fn has_build_time(&self) -> bool {
        self.build_time_unix != DEFAULT_BUILD_TIME_UNIX
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            build_time_unix: DEFAULT_BUILD_TIME_UNIX.to_string(),
            build_hash: DEFAULT_BUILD_HASH.to_string(),
            release_version: DEFAULT_RELEASE_VERSION.to_string(),
            build_url: DEFAULT_BUILD_URL.to_string(),
        }
    }
}
