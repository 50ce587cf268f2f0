//! Test doubles for the file system and license lookup capabilities.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{RecordingFileSystem, StaticLookup};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let lookup = Arc::new(StaticLookup::new().with("apple/swift-log", "Apache"));
//!     let fs = RecordingFileSystem::default();
//! }
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::common::fs::FileSystem;
use crate::error::LookupError;
use crate::github::LicenseLookup;
use crate::source::RepositoryCoordinates;

/// [`LicenseLookup`] answering from a fixed `owner/name -> license` table
///
/// Unknown repositories fail with a 404 status error.
#[derive(Debug, Default)]
pub struct StaticLookup {
    licenses: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, repository: &str, license: &str) -> Self {
        self.licenses
            .insert(repository.to_string(), license.to_string());
        self
    }

    /// Repositories looked up so far, sorted
    pub fn requested(&self) -> Vec<String> {
        let mut requested = self.requested.lock().expect("lock").clone();
        requested.sort();
        requested
    }
}

impl LicenseLookup for StaticLookup {
    async fn fetch_license(
        &self,
        repository: &RepositoryCoordinates,
    ) -> Result<String, LookupError> {
        let full_name = repository.full_name();
        self.requested
            .lock()
            .expect("lock")
            .push(full_name.clone());
        self.licenses
            .get(&full_name)
            .cloned()
            .ok_or(LookupError::Status {
                repository: full_name,
                status: 404,
            })
    }
}

/// One mutating call observed by [`RecordingFileSystem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    CreateDir(PathBuf),
    Write(PathBuf, Vec<u8>),
}

/// In-memory [`FileSystem`] that records directory creation and writes
///
/// Reads return what was written; listings are always empty.
#[derive(Debug, Default)]
pub struct RecordingFileSystem {
    calls: Mutex<Vec<FsCall>>,
}

impl RecordingFileSystem {
    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                FsCall::CreateDir(path) => Some(path),
                FsCall::Write(..) => None,
            })
            .collect()
    }

    pub fn written_files(&self) -> Vec<(PathBuf, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                FsCall::Write(path, bytes) => {
                    Some((path, String::from_utf8_lossy(&bytes).into_owned()))
                }
                FsCall::CreateDir(_) => None,
            })
            .collect()
    }
}

impl FileSystem for RecordingFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(PathBuf::from("/work"))
    }

    fn list_dir(&self, _path: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.calls()
            .iter()
            .any(|call| matches!(call, FsCall::CreateDir(dir) if dir == path))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.calls()
            .into_iter()
            .rev()
            .find_map(|call| match call {
                FsCall::Write(written, bytes) if written == path => Some(bytes),
                _ => None,
            })
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.calls
            .lock()
            .expect("lock")
            .push(FsCall::Write(path.to_path_buf(), contents.to_vec()));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.calls
            .lock()
            .expect("lock")
            .push(FsCall::CreateDir(path.to_path_buf()));
        Ok(())
    }
}
