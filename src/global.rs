//! Process-wide build info
//!
//! The registry is computed exactly once: either by an explicit [`init`] at
//! the top of `main`, or lazily from the compiled-in metadata on first read.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::build_info::BuildConfig;
use crate::error::{BuildInfoError, BuildInfoResult};
use crate::registry::BuildInfo;

static REGISTRY: OnceLock<BuildInfo> = OnceLock::new();

/// Initialize the process-wide registry, returning an error instead of aborting
pub fn try_init(config: BuildConfig) -> BuildInfoResult<&'static BuildInfo> {
    if REGISTRY.get().is_some() {
        return Err(BuildInfoError::AlreadyInitialized);
    }
    let info = BuildInfo::new(config)?;
    REGISTRY
        .set(info)
        .map_err(|_| BuildInfoError::AlreadyInitialized)?;
    Ok(get())
}

/// Initialize the process-wide registry
///
/// # Panics
///
/// Panics if the build time is not a valid integer. A malformed build time
/// means a broken build pipeline and the process must not start.
pub fn init(config: BuildConfig) -> &'static BuildInfo {
    match try_init(config) {
        Ok(info) => info,
        Err(BuildInfoError::AlreadyInitialized) => {
            tracing::warn!("Build info already initialized, keeping existing values");
            get()
        }
        Err(e) => abort(e),
    }
}

/// The process-wide registry, initialized from compiled-in metadata on first use
pub fn get() -> &'static BuildInfo {
    REGISTRY.get_or_init(|| match BuildInfo::new(BuildConfig::compiled()) {
        Ok(info) => info,
        Err(e) => abort(e),
    })
}

fn abort(e: BuildInfoError) -> ! {
    tracing::error!(error = %e, "Refusing to start with malformed build metadata");
    panic!("{}", e)
}

/// Release version of this binary, "dev" if none was injected
pub fn release_version() -> &'static str {
    get().release_version()
}

/// Build hash of this binary, "dev" if none was injected
pub fn build_hash() -> &'static str {
    get().build_hash()
}

/// When this binary was built
pub fn build_time() -> DateTime<Utc> {
    get().build_time()
}

/// CI build URL, possibly empty
pub fn build_url() -> &'static str {
    get().build_url()
}

/// When this process started
pub fn startup_time() -> DateTime<Utc> {
    get().startup_time()
}

pub fn module_info() -> &'static str {
    get().module_info()
}

pub fn basic_info() -> String {
    get().basic_info()
}

pub fn full_info() -> String {
    get().full_info()
}
