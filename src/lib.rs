//! buildinfo Library
//!
//! Build metadata for a running binary: build hash, release version, build
//! time, CI build URL and compiled-in dependency versions, plus process
//! startup time and uptime.
//!
//! The build pipeline injects the metadata through environment variables read
//! by the build script:
//!
//! ```text
//! BUILD_TIME_UNIX=$(date +%s) \
//! BUILD_HASH=$(git rev-parse --short HEAD) \
//! RELEASE_VERSION=${RELEASE_VERSION:-dev} \
//! BUILD_URL=${BUILD_URL:-} \
//!     cargo build --release
//! ```
//!
//! Call [`init`] first thing in `main`, then read the values anywhere:
//!
//! ```no_run
//! buildinfo::init(buildinfo::BuildConfig::compiled());
//! println!("{}", buildinfo::full_info());
//! ```

pub mod build_info;
pub mod error;
pub mod global;
pub mod process;
pub mod provenance;
pub mod registry;
pub mod report;

pub use build_info::BuildConfig;
pub use error::{BuildInfoError, BuildInfoResult, ParseTimeError};
pub use global::{
    basic_info, build_hash, build_time, build_url, full_info, get, init, module_info,
    release_version, startup_time, try_init,
};
pub use process::Startup;
pub use provenance::{CompiledProvenance, Module, Provenance, StaticProvenance};
pub use registry::{BuildInfo, BuildSnapshot};
