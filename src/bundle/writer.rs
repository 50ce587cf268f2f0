//! Writing descriptors into a bundle directory

use std::path::{Path, PathBuf};

use tracing::info;

use super::{BUNDLE_DIR_NAME, BundleDescriptor};
use crate::common::fs::FileSystem;
use crate::error::{Result, fs as fs_error};
use crate::resolver::ResolvedLicense;

/// Writes the property lists of one `Settings.bundle`
///
/// Writes are sequential and the first failure aborts. Files already
/// written are left in place.
pub struct BundleWriter<'a> {
    fs: &'a dyn FileSystem,
    dir: PathBuf,
}

impl<'a> BundleWriter<'a> {
    /// Writer for `<output_root>/Settings.bundle`
    pub fn new(fs: &'a dyn FileSystem, output_root: &Path) -> Self {
        Self {
            fs,
            dir: output_root.join(BUNDLE_DIR_NAME),
        }
    }

    /// The bundle directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the bundle directory; an existing one is reused
    pub fn create(&self) -> Result<()> {
        self.fs
            .create_dir_all(&self.dir)
            .map_err(|e| fs_error::directory_create_failed(&self.dir, &e))
    }

    /// Encode and write one descriptor, returning the written path
    pub fn write(&self, descriptor: &BundleDescriptor<'_>) -> Result<PathBuf> {
        let path = self.dir.join(descriptor.file_name());
        let data = descriptor.to_plist()?;
        self.fs
            .write(&path, &data)
            .map_err(|e| fs_error::write_failed(&path, &e))?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Write the acknowledgements index followed by one page per license
    ///
    /// The index lists exactly the licenses given, so every entry has a page.
    pub fn write_acknowledgements(&self, licenses: &[ResolvedLicense]) -> Result<()> {
        self.write(&BundleDescriptor::index_of(licenses))?;
        for info in licenses {
            self.write(&BundleDescriptor::LicensePage(info))?;
        }
        Ok(())
    }
}
