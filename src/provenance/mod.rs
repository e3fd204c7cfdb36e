//! Dependency provenance
//!
//! The toolchain version and dependency manifest compiled into the binary.

pub mod compiled;

// Compiled into the build script; included here for its tests
#[cfg(test)]
mod resolve;

pub use compiled::CompiledProvenance;

use serde::Serialize;

/// A dependency compiled into the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub path: String,
    pub version: String,
}

impl Module {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }
}

/// Source of the toolchain identity and dependency manifest
pub trait Provenance {
    /// Version string of the compiler that built the binary
    fn toolchain_version(&self) -> &str;

    /// Dependency closure, or None when the build carries no provenance
    fn modules(&self) -> Option<Vec<Module>>;
}

/// Provenance supplied directly by the embedder
#[derive(Debug, Clone, Default)]
pub struct StaticProvenance {
    toolchain_version: String,
    modules: Option<Vec<Module>>,
}

impl StaticProvenance {
    pub fn new(toolchain_version: impl Into<String>, modules: Option<Vec<Module>>) -> Self {
        Self {
            toolchain_version: toolchain_version.into(),
            modules,
        }
    }
}

impl Provenance for StaticProvenance {
    fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    fn modules(&self) -> Option<Vec<Module>> {
        self.modules.clone()
    }
}
