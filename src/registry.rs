//! Build info registry
//!
//! Holds the injected build metadata together with everything derived from it
//! at initialization, and renders the reports.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::build_info::BuildConfig;
use crate::error::{BuildInfoError, BuildInfoResult};
use crate::process::Startup;
use crate::provenance::{CompiledProvenance, Module, Provenance};
use crate::report::{self, BasicReport};

/// Build metadata plus the values computed from it once at startup
#[derive(Debug, Clone)]
pub struct BuildInfo {
    config: BuildConfig,
    build_time: DateTime<Utc>,
    startup: Startup,
    toolchain_version: String,
    modules: Option<Vec<Module>>,
    static_block: String,
    module_info: String,
}

/// Machine-readable view of the registry
#[derive(Debug, Clone, Serialize)]
pub struct BuildSnapshot {
    pub build_hash: String,
    pub release_version: String,
    pub build_time_unix: String,
    /// None when the build time was not provided
    pub build_time: Option<DateTime<Utc>>,
    pub build_url: Option<String>,
    pub toolchain_version: String,
    pub startup_time: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub modules: Vec<Module>,
}

impl BuildInfo {
    /// Build the registry using the provenance compiled into this binary
    pub fn new(config: BuildConfig) -> BuildInfoResult<Self> {
        Self::with_provenance(config, &CompiledProvenance)
    }

    /// Build the registry from an explicit provenance source
    pub fn with_provenance(config: BuildConfig, provenance: &dyn Provenance) -> BuildInfoResult<Self> {
        Self::with_startup(config, provenance, Startup::process())
    }

    /// Build the registry with an explicit startup instant
    pub fn with_startup(
        config: BuildConfig,
        provenance: &dyn Provenance,
        startup: Startup,
    ) -> BuildInfoResult<Self> {
        let secs = report::parse_epoch_seconds(&config.build_time_unix).map_err(|source| {
            BuildInfoError::InvalidBuildTime {
                value: config.build_time_unix.clone(),
                source,
            }
        })?;
        let build_time =
            DateTime::from_timestamp(secs, 0).ok_or(BuildInfoError::BuildTimeOutOfRange(secs))?;

        let toolchain_version = provenance.toolchain_version().to_string();
        let static_block = report::static_block(&config, &toolchain_version);
        let modules = provenance.modules();
        let module_info = report::module_report(modules.as_deref());

        tracing::debug!(
            build_hash = %config.build_hash,
            release_version = %config.release_version,
            modules = modules.as_ref().map_or(0, Vec::len),
            "Build info initialized"
        );

        Ok(Self {
            config,
            build_time,
            startup,
            toolchain_version,
            modules,
            static_block,
            module_info,
        })
    }

    /// Release version, "dev" unless one was injected
    pub fn release_version(&self) -> &str {
        &self.config.release_version
    }

    /// Build hash, "dev" unless one was injected
    pub fn build_hash(&self) -> &str {
        &self.config.build_hash
    }

    /// When the binary was built; the epoch if no build time was injected
    pub fn build_time(&self) -> DateTime<Utc> {
        self.build_time
    }

    /// CI build URL, possibly empty
    pub fn build_url(&self) -> &str {
        &self.config.build_url
    }

    /// When this process began running
    pub fn startup_time(&self) -> DateTime<Utc> {
        self.startup.wall_time()
    }

    /// Monotonic time since startup
    pub fn uptime(&self) -> Duration {
        self.startup.elapsed()
    }

    pub fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    /// Compiled-in dependencies, None for builds without provenance
    pub fn modules(&self) -> Option<&[Module]> {
        self.modules.as_deref()
    }

    /// Module table rendered at initialization, empty without provenance
    pub fn module_info(&self) -> &str {
        &self.module_info
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build time, uptime and static build rows as one aligned table
    pub fn basic_info(&self) -> String {
        self.basic_info_at(Utc::now(), self.uptime())
    }

    /// Basic info, a blank line, then the module table
    pub fn full_info(&self) -> String {
        self.full_info_at(Utc::now(), self.uptime())
    }

    pub fn snapshot(&self) -> BuildSnapshot {
        BuildSnapshot {
            build_hash: self.config.build_hash.clone(),
            release_version: self.config.release_version.clone(),
            build_time_unix: self.config.build_time_unix.clone(),
            build_time: self.config.has_build_time().then_some(self.build_time),
            build_url: Some(self.config.build_url.clone()).filter(|url| !url.is_empty()),
            toolchain_version: self.toolchain_version.clone(),
            startup_time: self.startup.wall_time(),
            uptime_seconds: self.uptime().as_secs(),
            modules: self.modules.clone().unwrap_or_default(),
        }
    }

    fn basic_info_at(&self, now: DateTime<Utc>, uptime: Duration) -> String {
        BasicReport {
            build_time: self.config.has_build_time().then_some(self.build_time),
            now,
            uptime_secs: uptime.as_secs(),
            static_block: &self.static_block,
        }
        .render()
    }

    fn full_info_at(&self, now: DateTime<Utc>, uptime: Duration) -> String {
        let mut info = self.basic_info_at(now, uptime);
        info.push('\n');
        info.push_str(&self.module_info);
        info
    }
}
