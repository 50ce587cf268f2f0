//! Main orchestrator for the generate operation
//!
//! The workflow is strictly linear:
//! 1. Resolve licenses (package cache scan, or `Package.resolved` + GitHub)
//! 2. Determine the output root (explicit path or current directory)
//! 3. Create `<output>/Settings.bundle`
//! 4. Write `Root.plist`
//! 5. Write `<code>.lproj/Root.strings` per recognised language
//! 6. Write `Acknowledgements.plist`
//! 7. Write one `<name>.plist` per license
//!
//! Any error aborts the run; nothing already written is rolled back.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::bundle::{BundleDescriptor, BundleWriter};
use crate::common::fs::FileSystem;
use crate::error::Result;
use crate::github::LicenseLookup;
use crate::localization::{self, Language};
use crate::manifest::ManifestLocation;
use crate::resolver::{self, LicenseSource};

/// Default `--languages` value
pub const DEFAULT_LANGUAGES: &str = "en";

/// Settings for one run, independent of how they were parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Directory searched for the `.xcodeproj`; the current directory when absent
    pub directory_path: Option<PathBuf>,
    /// Comma-separated language codes
    pub languages: String,
    /// Parent directory of `Settings.bundle`; the current directory when absent
    pub output_path: Option<PathBuf>,
    /// Package cache to scan instead of querying GitHub
    pub package_cache_path: Option<PathBuf>,
    /// `Package.resolved` to read instead of searching for it
    pub package_resolved_path: Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            directory_path: None,
            languages: DEFAULT_LANGUAGES.to_string(),
            output_path: None,
            package_cache_path: None,
            package_resolved_path: None,
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub bundle_dir: PathBuf,
    /// Names of the written license pages, sorted
    pub licenses: Vec<String>,
    /// Languages with a strings file, in request order
    pub languages: Vec<Language>,
}

/// Main orchestrator for the generate operation
pub struct GenerateOperation<'a, L: LicenseLookup> {
    fs: &'a dyn FileSystem,
    lookup: Arc<L>,
    config: GenerateConfig,
}

impl<'a, L: LicenseLookup> GenerateOperation<'a, L> {
    pub fn new(fs: &'a dyn FileSystem, lookup: Arc<L>, config: GenerateConfig) -> Self {
        Self {
            fs,
            lookup,
            config,
        }
    }

    /// Pick the license source; a package cache path wins over any manifest option
    pub fn license_source(&self) -> Result<LicenseSource> {
        if let Some(cache) = &self.config.package_cache_path {
            return Ok(LicenseSource::PackageCache(cache.clone()));
        }

        let location = match (
            &self.config.package_resolved_path,
            &self.config.directory_path,
        ) {
            (Some(path), _) => ManifestLocation::Explicit(path.clone()),
            (None, Some(directory)) => ManifestLocation::SearchRoot(directory.clone()),
            (None, None) => ManifestLocation::SearchRoot(self.fs.current_dir()?),
        };
        Ok(LicenseSource::Manifest(location))
    }

    fn output_root(&self) -> Result<PathBuf> {
        if let Some(path) = &self.config.output_path {
            info!(
                "Using supplied directory as output path for settings bundle: {}",
                path.display()
            );
            return Ok(path.clone());
        }

        let current = self.fs.current_dir()?;
        info!(
            "No output path specified, using current directory: {}",
            current.display()
        );
        Ok(current)
    }

    /// Run the full workflow
    pub async fn execute(&self) -> Result<GenerateSummary> {
        let source = self.license_source()?;
        let licenses = resolver::resolve(&source, self.fs, Arc::clone(&self.lookup)).await?;

        let output_root = self.output_root()?;
        let writer = BundleWriter::new(self.fs, &output_root);
        writer.create()?;
        writer.write(&BundleDescriptor::Root)?;

        let languages =
            localization::write_localizations(self.fs, writer.dir(), &self.config.languages)?;

        writer.write_acknowledgements(&licenses)?;

        let mut names: Vec<String> = licenses.into_iter().map(|l| l.name).collect();
        names.sort();

        Ok(GenerateSummary {
            bundle_dir: writer.dir().to_path_buf(),
            licenses: names,
            languages,
        })
    }
}
