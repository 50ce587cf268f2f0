//! Common test utilities for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Path from an `.xcodeproj` to its `Package.resolved`
#[allow(dead_code)]
pub const MANIFEST_SUFFIX: &str = "project.xcworkspace/xcshareddata/swiftpm/Package.resolved";

/// A temporary project directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `<project>.xcodeproj/.../Package.resolved` with the given pins
    #[allow(dead_code)]
    pub fn create_manifest(&self, project: &str, pins: &[(&str, &str)]) -> PathBuf {
        let relative = format!("{project}.xcodeproj/{MANIFEST_SUFFIX}");
        self.write_file(&relative, &manifest_json(pins));
        self.path.join(relative)
    }

    /// Create `<cache>/<package>/<file>` entries of a package cache
    #[allow(dead_code)]
    pub fn create_cached_package(&self, cache: &str, package: &str, files: &[(&str, &str)]) {
        std::fs::create_dir_all(self.path.join(cache).join(package))
            .expect("Failed to create package directory");
        for (file, content) in files {
            self.write_file(&format!("{cache}/{package}/{file}"), content);
        }
    }

    /// Sorted relative paths of every file under `dir`
    #[allow(dead_code)]
    pub fn list_files(&self, dir: &str) -> Vec<String> {
        let root = self.path.join(dir);
        let mut files = Vec::new();
        collect_files(&root, &root, &mut files);
        files.sort();
        files
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// `Package.resolved` (version 2) JSON for the given `(identity, location)` pins
#[allow(dead_code)]
pub fn manifest_json(pins: &[(&str, &str)]) -> String {
    let pins: Vec<serde_json::Value> = pins
        .iter()
        .map(|(identity, location)| {
            serde_json::json!({
                "identity": identity,
                "kind": "remoteSourceControl",
                "location": location,
                "state": {
                    "revision": "1f9e0d1e0bd6e3a2a7e0a172105beac1a4d1b1ab",
                    "version": "1.0.0"
                }
            })
        })
        .collect();
    serde_json::json!({ "pins": pins, "version": 2 }).to_string()
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).expect("Path outside root");
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn acknowledgements_cmd() -> Command {
    let mut cmd = Command::cargo_bin("swiftpm-settings-acknowledgements").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Command running with `workspace` as the current directory
#[allow(dead_code)]
pub fn acknowledgements_cmd_for_workspace(workspace: &Path) -> Command {
    let mut cmd = acknowledgements_cmd();
    cmd.current_dir(workspace);
    cmd
}
