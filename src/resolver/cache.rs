//! License discovery in a local package cache
//!
//! Xcode checks every package out into its own directory under the cache
//! root (`SourcePackages/checkouts/<package>`). The first file in a package
//! directory whose name contains "license" (any case) is its license.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::ResolvedLicense;
use crate::common::fs::{FileSystem, file_name_of};
use crate::error::{Result, fs as fs_error};

const LICENSE_TOKEN: &str = "license";

/// Collect one license per package directory under `cache_root`
///
/// Packages without a license file, or with a license that is not UTF-8,
/// are skipped with a warning. Failing to list a directory or read a
/// license file aborts.
pub fn resolve(fs: &dyn FileSystem, cache_root: &Path) -> Result<Vec<ResolvedLicense>> {
    let entries = fs
        .list_dir(cache_root)
        .map_err(|e| fs_error::directory_read_failed(cache_root, &e))?;

    let mut licenses = Vec::new();
    for package_dir in entries.into_iter().filter(|entry| fs.is_dir(entry)) {
        let package_name = file_name_of(&package_dir);

        let Some(license_file) = find_license_file(fs, &package_dir)? else {
            warn!("Could not find license for {package_name}");
            continue;
        };

        let bytes = fs
            .read(&license_file)
            .map_err(|e| fs_error::read_failed(&license_file, &e))?;
        let Ok(license_text) = String::from_utf8(bytes) else {
            warn!(
                "Could not decode license for {package_name} at {}",
                license_file.display()
            );
            continue;
        };

        info!("Found license for {package_name}");
        licenses.push(ResolvedLicense::new(package_name, license_text));
    }

    Ok(licenses)
}

/// First non-directory entry whose file name contains "license", case-insensitively
fn find_license_file(fs: &dyn FileSystem, package_dir: &Path) -> Result<Option<PathBuf>> {
    let files = fs
        .list_dir(package_dir)
        .map_err(|e| fs_error::directory_read_failed(package_dir, &e))?;

    Ok(files.into_iter().find(|file| is_license_file(fs, file)))
}

fn is_license_file(fs: &dyn FileSystem, path: &Path) -> bool {
    file_name_of(path).to_lowercase().contains(LICENSE_TOKEN) && !fs.is_dir(path)
}
