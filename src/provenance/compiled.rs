//! Provenance embedded by the build script

use super::{Module, Provenance};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/provenance.rs"));
}

/// Toolchain and lockfile data captured when this crate was compiled
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledProvenance;

impl Provenance for CompiledProvenance {
    fn toolchain_version(&self) -> &str {
        generated::RUSTC_VERSION
    }

    fn modules(&self) -> Option<Vec<Module>> {
        generated::MODULES.map(|modules| {
            modules
                .iter()
                .map(|(path, version)| Module::new(*path, *version))
                .collect()
        })
    }
}
