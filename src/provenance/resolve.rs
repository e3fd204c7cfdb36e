//! Dependency graph walk over `cargo metadata` output
//!
//! Shared with the build script, so it only uses `serde` and `serde_json`.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The parts of `cargo metadata --format-version 1` the walk needs
#[derive(Debug, Deserialize)]
pub struct Metadata {
    packages: Vec<Package>,
    resolve: Option<Resolve>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    id: String,
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct Resolve {
    root: Option<String>,
    nodes: Vec<Node>,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: String,
    #[serde(default)]
    deps: Vec<NodeDep>,
}

#[derive(Debug, Deserialize)]
struct NodeDep {
    pkg: String,
    #[serde(default)]
    dep_kinds: Vec<DepKind>,
}

#[derive(Debug, Deserialize)]
struct DepKind {
    /// None for normal dependencies, "dev" or "build" otherwise
    kind: Option<String>,
}

impl Metadata {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Lockfile shared by the workspace
    pub fn lockfile(&self) -> PathBuf {
        self.workspace_root.join("Cargo.lock")
    }

    /// Packages reachable from the root through normal dependency edges
    ///
    /// Build and dev dependencies are not followed, at any depth. Returns None
    /// when there is no root package (a virtual workspace manifest).
    pub fn linked_packages(&self) -> Option<Vec<(String, String)>> {
        let resolve = self.resolve.as_ref()?;
        let root = resolve.root.as_deref()?;
        let nodes: HashMap<&str, &Node> = resolve.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = nodes.get(id) else {
                continue;
            };
            for dep in &node.deps {
                let normal = dep.dep_kinds.iter().any(|k| k.kind.is_none());
                if normal && dep.pkg != root && seen.insert(dep.pkg.as_str()) {
                    stack.push(dep.pkg.as_str());
                }
            }
        }

        let mut linked: Vec<(String, String)> = self
            .packages
            .iter()
            .filter(|p| seen.contains(p.id.as_str()))
            .map(|p| (p.name.clone(), p.version.clone()))
            .collect();
        linked.sort();
        linked.dedup();
        Some(linked)
    }
}

/// Paths that exist, so cargo is not told to watch missing files
pub fn existing_paths(paths: &[&Path]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|p| p.exists())
        .map(|p| p.to_path_buf())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape of `cargo metadata --filter-platform x86_64-unknown-linux-gnu`:
    // windows-sys is still listed as a package but has no edge in the resolve
    const METADATA: &str = r#"{
        "packages": [
            {"id": "app 0.1.0 (path+file:///ws/app)", "name": "app", "version": "0.1.0"},
            {"id": "serde 1.0.200", "name": "serde", "version": "1.0.200"},
            {"id": "serde_derive 1.0.200", "name": "serde_derive", "version": "1.0.200"},
            {"id": "chrono 0.4.38", "name": "chrono", "version": "0.4.38"},
            {"id": "num-traits 0.2.19", "name": "num-traits", "version": "0.2.19"},
            {"id": "autocfg 1.3.0", "name": "autocfg", "version": "1.3.0"},
            {"id": "toml 0.8.23", "name": "toml", "version": "0.8.23"},
            {"id": "tempfile 3.10.0", "name": "tempfile", "version": "3.10.0"},
            {"id": "windows-sys 0.61.2", "name": "windows-sys", "version": "0.61.2"}
        ],
        "resolve": {
            "root": "app 0.1.0 (path+file:///ws/app)",
            "nodes": [
                {"id": "app 0.1.0 (path+file:///ws/app)", "deps": [
                    {"pkg": "serde 1.0.200", "dep_kinds": [{"kind": null, "target": null}]},
                    {"pkg": "chrono 0.4.38", "dep_kinds": [{"kind": null, "target": null}]},
                    {"pkg": "toml 0.8.23", "dep_kinds": [{"kind": "build", "target": null}]},
                    {"pkg": "tempfile 3.10.0", "dep_kinds": [{"kind": "dev", "target": null}]}
                ]},
                {"id": "serde 1.0.200", "deps": [
                    {"pkg": "serde_derive 1.0.200", "dep_kinds": [{"kind": null, "target": null}]}
                ]},
                {"id": "serde_derive 1.0.200", "deps": []},
                {"id": "chrono 0.4.38", "deps": [
                    {"pkg": "num-traits 0.2.19", "dep_kinds": [{"kind": null, "target": null}]}
                ]},
                {"id": "num-traits 0.2.19", "deps": [
                    {"pkg": "autocfg 1.3.0", "dep_kinds": [{"kind": "build", "target": null}]}
                ]},
                {"id": "autocfg 1.3.0", "deps": []},
                {"id": "toml 0.8.23", "deps": []},
                {"id": "tempfile 3.10.0", "deps": []}
            ]
        },
        "workspace_root": "/ws"
    }"#;

    fn names(metadata: &Metadata) -> Vec<String> {
        metadata
            .linked_packages()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    #[test]
    fn test_follows_normal_edges_transitively() {
        let metadata = Metadata::parse(METADATA).unwrap();
        assert_eq!(
            names(&metadata),
            vec!["chrono", "num-traits", "serde", "serde_derive"]
        );
    }

    #[test]
    fn test_excludes_build_dev_and_other_platform_crates() {
        let linked = names(&Metadata::parse(METADATA).unwrap());
        for excluded in ["toml", "tempfile", "autocfg", "windows-sys", "app"] {
            assert!(!linked.iter().any(|n| n == excluded), "{excluded} listed");
        }
    }

    #[test]
    fn test_edge_with_normal_and_build_kinds_is_followed() {
        let json = METADATA.replace(
            r#""toml 0.8.23", "dep_kinds": [{"kind": "build", "target": null}]"#,
            r#""toml 0.8.23", "dep_kinds": [{"kind": "build", "target": null}, {"kind": null, "target": null}]"#,
        );
        let linked = names(&Metadata::parse(&json).unwrap());
        assert!(linked.iter().any(|n| n == "toml"));
    }

    #[test]
    fn test_virtual_workspace_has_no_provenance() {
        let json = METADATA.replace(r#""root": "app 0.1.0 (path+file:///ws/app)","#, r#""root": null,"#);
        assert!(Metadata::parse(&json).unwrap().linked_packages().is_none());
    }

    #[test]
    fn test_lockfile_at_workspace_root() {
        let metadata = Metadata::parse(METADATA).unwrap();
        assert_eq!(metadata.lockfile(), PathBuf::from("/ws/Cargo.lock"));
    }

    #[test]
    fn test_existing_paths_skips_missing_files() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-Cargo.lock");
        assert_eq!(existing_paths(&[manifest.as_path(), missing.as_path()]), vec![manifest.clone()]);
    }
}
