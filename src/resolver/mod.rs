//! License resolution
//!
//! Turns the project's dependencies into `(name, license text)` pairs, from one
//! of two mutually exclusive sources:
//! - [`cache`]: scan a local `SwiftPM` package cache directory (no network)
//! - [`remote`]: look up every GitHub-hosted pin of `Package.resolved` concurrently
//!
//! The two sources name their results differently. Cache entries are named
//! after the package's cache directory, remote entries after the pin identity.

pub mod cache;
pub mod remote;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::common::fs::FileSystem;
use crate::error::Result;
use crate::github::LicenseLookup;
use crate::manifest::{self, ManifestLocation};

/// A package name with the full text of its license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLicense {
    pub name: String,
    /// License body, whitespace preserved
    pub license_text: String,
}

impl ResolvedLicense {
    pub fn new(name: impl Into<String>, license_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license_text: license_text.into(),
        }
    }
}

/// Where licenses come from for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseSource {
    /// Scan this `SwiftPM` package cache directory
    PackageCache(PathBuf),
    /// Read `Package.resolved` and query the remote lookup
    Manifest(ManifestLocation),
}

/// Resolve all licenses for the configured source
pub async fn resolve<L: LicenseLookup>(
    source: &LicenseSource,
    fs: &dyn FileSystem,
    lookup: Arc<L>,
) -> Result<Vec<ResolvedLicense>> {
    match source {
        LicenseSource::PackageCache(cache_root) => {
            info!(
                "Using package cache at {}; parsing available packages for licenses",
                cache_root.display()
            );
            cache::resolve(fs, cache_root)
        }
        LicenseSource::Manifest(location) => {
            let document = manifest::read(fs, location)?;
            info!("Retrieving package and license information from GitHub");
            Ok(remote::resolve(&document, lookup).await)
        }
    }
}
