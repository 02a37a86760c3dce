//! Project dependency signals: manifest fingerprint and per-file imports

use crate::discovery::{discover_source_files, relative_path};
use crate::imports::extract_imports;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Package-description files checked for at the project root, in report order
pub const MANIFEST_CANDIDATES: &[&str] = &[
    "pubspec.yaml",
    "package.json",
    "requirements.txt",
    "Pipfile",
    "setup.py",
    "Cargo.toml",
    "pom.xml",
    "build.gradle",
    "composer.json",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    /// Manifest file names present at the root
    pub package_files: Vec<String>,
    /// Root-relative path -> import targets. Files without imports are omitted.
    pub import_patterns: BTreeMap<String, Vec<String>>,
}

/// Fingerprint the root's manifests and collect imports from every source file
pub fn extract_dependencies(root: &Path) -> DependencyReport {
    let package_files = MANIFEST_CANDIDATES
        .iter()
        .filter(|name| root.join(name).exists())
        .map(|name| name.to_string())
        .collect();

    let import_patterns = discover_source_files(root)
        .into_iter()
        .filter_map(|file| {
            let imports = extract_imports(&file);
            if imports.is_empty() {
                None
            } else {
                Some((relative_path(root, &file), imports))
            }
        })
        .collect();

    DependencyReport {
        package_files,
        import_patterns,
    }
}
