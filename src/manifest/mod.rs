//! `Package.resolved` discovery and parsing
//!
//! The manifest is the lock file `SwiftPM` writes next to an Xcode project once
//! package versions are resolved. Only the pinned identity and source
//! location of each package are read; everything else is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::common::fs::{FileSystem, file_name_of};
use crate::error::{Result, fs as fs_error, manifest as manifest_error};

#[cfg(test)]
mod tests;

/// Extension of the directory holding an Xcode project
pub const PROJECT_CONTAINER_EXTENSION: &str = "xcodeproj";

/// Path from the project container to the manifest
pub const MANIFEST_SUFFIX: [&str; 4] = [
    "project.xcworkspace",
    "xcshareddata",
    "swiftpm",
    "Package.resolved",
];

/// One resolved package
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyPin {
    /// The package's declared name
    pub identity: String,
    /// Where the package comes from, usually a git URL
    #[serde(rename = "location")]
    pub source_location: String,
}

/// The parts of `Package.resolved` the generator is interested in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestDocument {
    pub pins: Vec<DependencyPin>,
    pub version: i64,
}

impl ManifestDocument {
    /// Parse a manifest from its raw bytes, reporting `location` on failure
    pub fn from_bytes(bytes: &[u8], location: &Path) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| manifest_error::parse_failed(location, e.to_string()))?;
        serde_json::from_str(text)
            .map_err(|e| manifest_error::parse_failed(location, e.to_string()))
    }
}

/// Where to look for the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    /// Read this file directly
    Explicit(PathBuf),
    /// Search this directory for a project container
    SearchRoot(PathBuf),
}

/// Find the manifest inside the first `.xcodeproj` directly under `root`
pub fn locate(fs: &dyn FileSystem, root: &Path) -> Result<PathBuf> {
    let entries = fs
        .list_dir(root)
        .map_err(|e| fs_error::directory_read_failed(root, &e))?;

    let container = entries
        .into_iter()
        .find(|entry| {
            entry
                .extension()
                .is_some_and(|ext| ext == PROJECT_CONTAINER_EXTENSION)
        })
        .ok_or_else(|| manifest_error::not_found(root))?;

    info!("Found project container {}", file_name_of(&container));

    Ok(MANIFEST_SUFFIX
        .iter()
        .fold(container, |path, component| path.join(component)))
}

/// Locate (if needed), read and parse the manifest
pub fn read(fs: &dyn FileSystem, location: &ManifestLocation) -> Result<ManifestDocument> {
    let path = match location {
        ManifestLocation::Explicit(path) => {
            info!(
                "Using user-specified Package.resolved at {}",
                path.display()
            );
            path.clone()
        }
        ManifestLocation::SearchRoot(root) => {
            info!("Looking for .xcodeproj in {}", root.display());
            locate(fs, root)?
        }
    };

    let bytes = fs
        .read(&path)
        .map_err(|e| manifest_error::parse_failed(&path, e.to_string()))?;
    let document = ManifestDocument::from_bytes(&bytes, &path)?;

    info!(
        "Read {} pins from {} (version {})",
        document.pins.len(),
        path.display(),
        document.version
    );
    Ok(document)
}
