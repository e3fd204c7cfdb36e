//! Build script for buildinfo
//!
//! Forwards the CI-provided build metadata to the compiler and embeds the
//! toolchain version and dependency manifest.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[path = "src/provenance/resolve.rs"]
mod resolve;

use resolve::Metadata;

/// CI variables and the names they are forwarded under
const FORWARDED: &[(&str, &str)] = &[
    ("BUILD_TIME_UNIX", "BUILDINFO_BUILD_TIME_UNIX"),
    ("BUILD_HASH", "BUILDINFO_BUILD_HASH"),
    ("RELEASE_VERSION", "BUILDINFO_RELEASE_VERSION"),
    ("BUILD_URL", "BUILDINFO_BUILD_URL"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BUILDINFO_MANIFEST_PATH");

    for (ci_var, forwarded) in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", ci_var);
        if let Ok(value) = env::var(ci_var) {
            println!("cargo:rustc-env={}={}", forwarded, value);
        }
    }

    // Also output for build log visibility
    if let Some(stamp) = env::var("BUILD_TIME_UNIX")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    {
        println!("cargo:warning=buildinfo: build time {}", stamp);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let generated = render_provenance(&rustc_version(), linked_modules().as_deref());
    fs::write(out_dir.join("provenance.rs"), generated)
        .expect("Failed to write provenance file");
}

fn rustc_version() -> String {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Manifest of the package whose dependencies are reported
fn manifest_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("BUILDINFO_MANIFEST_PATH") {
        return Some(PathBuf::from(path));
    }
    env::var("CARGO_MANIFEST_DIR")
        .ok()
        .map(|dir| Path::new(&dir).join("Cargo.toml"))
}

/// Dependencies linked into the target, or None without provenance
fn linked_modules() -> Option<Vec<(String, String)>> {
    let manifest = manifest_path()?;
    let target = env::var("TARGET").ok()?;
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    let output = Command::new(cargo)
        .args(["metadata", "--format-version", "1", "--offline"])
        .arg("--manifest-path")
        .arg(&manifest)
        .args(["--filter-platform", &target])
        .output()
        .ok()?;
    if !output.status.success() {
        println!(
            "cargo:warning=buildinfo: cargo metadata failed for {}: {}",
            manifest.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let metadata = match Metadata::parse(&String::from_utf8_lossy(&output.stdout)) {
        Ok(metadata) => metadata,
        Err(e) => {
            println!("cargo:warning=buildinfo: unreadable cargo metadata: {}", e);
            return None;
        }
    };

    for path in resolve::existing_paths(&[manifest.as_path(), metadata.lockfile().as_path()]) {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    metadata.linked_packages()
}

fn render_provenance(rustc: &str, modules: Option<&[(String, String)]>) -> String {
    let mut out = format!("pub(crate) const RUSTC_VERSION: &str = {:?};\n", rustc);
    match modules {
        Some(modules) => {
            out.push_str("pub(crate) const MODULES: Option<&[(&str, &str)]> = Some(&[\n");
            for (name, version) in modules {
                out.push_str(&format!("    ({:?}, {:?}),\n", name, version));
            }
            out.push_str("]);\n");
        }
        None => out.push_str("pub(crate) const MODULES: Option<&[(&str, &str)]> = None;\n"),
    }
    out
}
